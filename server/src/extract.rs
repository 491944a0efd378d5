//! Custom extractors

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::{header, request::Parts};
use serde::de::DeserializeOwned;

use crate::prelude::*;

fn bearer_token(parts: &Parts) -> Option<&str> {
	let value = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
	value.strip_prefix("Bearer ").map(str::trim).filter(|token| !token.is_empty())
}

// Session //
//*********//
/// Token of a logged-in operator, rejects the request otherwise
#[derive(Debug, Clone)]
pub struct Session(pub Box<str>);

impl FromRequestParts<App> for Session {
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, app: &App) -> Result<Self, Self::Rejection> {
		let OptionalSession(session) = OptionalSession::from_request_parts(parts, app).await?;
		session.map(Session).ok_or_else(|| {
			debug!("Rejecting {} {}: no valid session", parts.method, parts.uri.path());
			Error::Unauthorized
		})
	}
}

// OptionalSession //
//*****************//
/// Like [`Session`] but never fails; unknown or revoked tokens read as `None`
#[derive(Debug, Clone)]
pub struct OptionalSession(pub Option<Box<str>>);

impl FromRequestParts<App> for OptionalSession {
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, app: &App) -> Result<Self, Self::Rejection> {
		let session = bearer_token(parts).filter(|token| app.sessions.contains(token)).map(Box::from);
		Ok(OptionalSession(session))
	}
}

// JsonBody //
//**********//
/// JSON request body; a body that does not deserialize becomes a validation error
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
	T: DeserializeOwned,
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		let axum::Json(value) = axum::Json::<T>::from_request(req, state).await.map_err(|rejection| {
			debug!("Rejected JSON body: {}", rejection.body_text());
			Error::ValidationError(rejection.body_text())
		})?;
		Ok(JsonBody(value))
	}
}

// vim: ts=4
