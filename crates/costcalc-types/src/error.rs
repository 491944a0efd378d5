//! Error type shared by every crate of the workspace.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub type ClResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	NotFound,
	PermissionDenied,
	Unauthorized,
	ValidationError(String),
	ConfigError(String),
	Parse,
	Internal(String),

	// externals
	Io(std::io::Error),
	Json(serde_json::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::Json(err)
	}
}

impl From<axum::http::Error> for Error {
	fn from(err: axum::http::Error) -> Self {
		Self::Internal(format!("http: {}", err))
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::PermissionDenied => write!(f, "permission denied"),
			Error::Unauthorized => write!(f, "unauthorized"),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::Parse => write!(f, "parse error"),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
			Error::Json(err) => write!(f, "json error: {}", err),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(err) => Some(err),
			Error::Json(err) => Some(err),
			_ => None,
		}
	}
}

impl Error {
	pub fn status_code(&self) -> StatusCode {
		match self {
			Error::NotFound => StatusCode::NOT_FOUND,
			Error::PermissionDenied => StatusCode::FORBIDDEN,
			Error::Unauthorized => StatusCode::UNAUTHORIZED,
			Error::ValidationError(_) | Error::Parse | Error::Json(_) => StatusCode::BAD_REQUEST,
			Error::ConfigError(_) | Error::Internal(_) | Error::Io(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}

	fn code(&self) -> &'static str {
		match self {
			Error::NotFound => "E-NOTFOUND",
			Error::PermissionDenied => "E-PERM",
			Error::Unauthorized => "E-AUTH",
			Error::ValidationError(_) => "E-VALIDATION",
			Error::Parse | Error::Json(_) => "E-PARSE",
			Error::ConfigError(_) | Error::Internal(_) | Error::Io(_) => "E-INTERNAL",
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let status = self.status_code();
		// Internal details stay in the log
		let message = if status.is_server_error() {
			tracing::error!("request failed: {}", self);
			"internal server error".to_string()
		} else {
			self.to_string()
		};
		(status, Json(json!({ "error": { "code": self.code(), "message": message } })))
			.into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_status_codes() {
		assert_eq!(Error::NotFound.status_code(), StatusCode::NOT_FOUND);
		assert_eq!(Error::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
		assert_eq!(Error::PermissionDenied.status_code(), StatusCode::FORBIDDEN);
		assert_eq!(Error::ValidationError("x".into()).status_code(), StatusCode::BAD_REQUEST);
		assert_eq!(
			Error::Io(std::io::Error::other("disk")).status_code(),
			StatusCode::INTERNAL_SERVER_ERROR
		);
	}

	#[test]
	fn test_display() {
		assert_eq!(Error::ValidationError("title".into()).to_string(), "validation error: title");
	}
}

// vim: ts=4
