//! Settings handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use costcalc_core::settings::{FieldChange, Settings, SettingsPatch};

use crate::extract::JsonBody;
use crate::prelude::*;
use crate::types::ApiResponse;

#[derive(Debug, Serialize)]
pub struct PatchSettingsResponse {
	pub settings: Settings,
	pub changes: Vec<FieldChange>,
	/// False when the snapshot file could not be written
	pub persisted: bool,
}

/// GET /api/settings
pub async fn get_settings(
	State(app): State<App>,
) -> ClResult<(StatusCode, Json<ApiResponse<Settings>>)> {
	let settings = app.store.read().get_settings().clone();
	Ok((StatusCode::OK, Json(ApiResponse::new(settings))))
}

/// PATCH /api/settings - Merge a partial update, untouched fields keep their values
pub async fn patch_settings(
	State(app): State<App>,
	JsonBody(patch): JsonBody<SettingsPatch>,
) -> ClResult<(StatusCode, Json<ApiResponse<PatchSettingsResponse>>)> {
	let (changes, settings) = {
		let mut store = app.store.write();
		let changes = store.update_settings(&patch);
		(changes, store.get_settings().clone())
	};
	info!("Settings updated, {} field(s) changed", changes.len());

	let persisted = changes.is_empty() || app.persist_or_log().await;

	let response = PatchSettingsResponse { settings, changes, persisted };
	Ok((StatusCode::OK, Json(ApiResponse::new(response))))
}

// vim: ts=4
