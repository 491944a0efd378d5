use axum::{Json, extract::State, http::StatusCode};

use costcalc_core::estimate::{self, Estimate, EstimateRequest};

use crate::extract::JsonBody;
use crate::prelude::*;
use crate::types::ApiResponse;

/// POST /api/estimate - Cost estimate from the current settings
pub async fn post_estimate(
	State(app): State<App>,
	JsonBody(req): JsonBody<EstimateRequest>,
) -> ClResult<(StatusCode, Json<ApiResponse<Estimate>>)> {
	let estimate = estimate::estimate(app.store.read().get_settings(), &req)?;
	Ok((StatusCode::OK, Json(ApiResponse::new(estimate))))
}

// vim: ts=4
