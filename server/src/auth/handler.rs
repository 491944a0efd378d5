use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use std::time::Duration;

use costcalc_core::Credentials;

use crate::extract::{JsonBody, OptionalSession};
use crate::prelude::*;
use crate::types::ApiResponse;

/// Delay before answering a rejected login
const LOGIN_FAILURE_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
	pub is_authenticated: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
	pub is_authenticated: bool,
	/// Sent back as `Authorization: Bearer <token>` on admin requests
	pub token: Box<str>,
}

/// POST /api/auth/login
pub async fn post_login(
	State(app): State<App>,
	JsonBody(credentials): JsonBody<Credentials>,
) -> ClResult<(StatusCode, Json<ApiResponse<LoginResponse>>)> {
	let res = {
		let mut store = app.store.write();
		store.login(&credentials).map(|()| app.sessions.create())
	};
	let token = match res {
		Ok(token) => token,
		Err(err) => {
			tokio::time::sleep(LOGIN_FAILURE_DELAY).await;
			return Err(err);
		}
	};

	Ok((StatusCode::OK, Json(ApiResponse::new(LoginResponse { is_authenticated: true, token }))))
}

/// POST /api/auth/logout - Revokes the presented token
pub async fn post_logout(
	State(app): State<App>,
	OptionalSession(session): OptionalSession,
) -> ClResult<(StatusCode, Json<ApiResponse<AuthStatus>>)> {
	if let Some(token) = session {
		let mut store = app.store.write();
		if app.sessions.revoke(&token) && app.sessions.is_empty() {
			store.logout();
		}
	}
	Ok((StatusCode::OK, Json(ApiResponse::new(AuthStatus { is_authenticated: false }))))
}

/// GET /api/auth/status - Whether the caller holds a valid session
pub async fn get_status(
	OptionalSession(session): OptionalSession,
) -> ClResult<(StatusCode, Json<ApiResponse<AuthStatus>>)> {
	let is_authenticated = session.is_some();
	Ok((StatusCode::OK, Json(ApiResponse::new(AuthStatus { is_authenticated }))))
}

// vim: ts=4
