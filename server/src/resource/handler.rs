//! Resource handlers: list, upload, delete and blob download

use axum::{
	Json,
	body::Body,
	extract::{Multipart, Path, State},
	http::{StatusCode, header},
	response::Response,
};
use serde::Serialize;

use costcalc_core::draft::ResourceDraft;
use costcalc_core::{Resource, ResourceType};

use crate::blob_adapter::{self, BLOB_URL_PREFIX};
use crate::prelude::*;
use crate::types::ApiResponse;

#[derive(Debug, Serialize)]
pub struct DeleteResourceResponse {
	pub id: ResourceId,
	pub removed: bool,
	pub persisted: bool,
}

#[derive(Debug, Serialize)]
pub struct CreateResourceResponse {
	#[serde(flatten)]
	pub resource: Resource,
	/// False when the snapshot file could not be written
	pub persisted: bool,
}

fn multipart_error(err: impl std::fmt::Display) -> Error {
	Error::ValidationError(format!("Invalid upload: {}", err))
}

/// GET /api/resources
pub async fn list_resources(
	State(app): State<App>,
) -> ClResult<(StatusCode, Json<ApiResponse<Vec<Resource>>>)> {
	let resources = app.store.read().resources().to_vec();
	Ok((StatusCode::OK, Json(ApiResponse::new(resources))))
}

/// POST /api/resources - multipart form with `title`, `description`,
/// `category`, `type` and `file` fields
pub async fn post_resource(
	State(app): State<App>,
	mut multipart: Multipart,
) -> ClResult<(StatusCode, Json<ApiResponse<CreateResourceResponse>>)> {
	let mut draft = ResourceDraft::new();
	let mut file: Option<(String, Vec<u8>)> = None;

	while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
		let name = field.name().unwrap_or_default().to_string();
		match name.as_str() {
			"file" => {
				let file_name = field.file_name().unwrap_or("upload").to_string();
				let data = field.bytes().await.map_err(multipart_error)?;
				file = Some((file_name, data.to_vec()));
			}
			"title" => draft.title = field.text().await.map_err(multipart_error)?,
			"description" => draft.description = field.text().await.map_err(multipart_error)?,
			"category" => draft.category = field.text().await.map_err(multipart_error)?,
			"type" => {
				draft.resource_type =
					field.text().await.map_err(multipart_error)?.trim().parse::<ResourceType>()?;
			}
			_ => debug!("Ignoring unknown upload field '{}'", name),
		}
	}

	// Reject before storing anything
	if draft.title.trim().is_empty() {
		return Err(Error::ValidationError("Resource title is required".into()));
	}
	let Some((file_name, data)) = file else {
		return Err(Error::ValidationError("Resource file is required".into()));
	};

	let handle = app.blob_adapter.upload(&file_name, &data).await?;
	info!("Stored upload '{}' as {} ({} bytes)", handle.file_name, handle.blob_id, handle.size);
	draft.select_file(handle);

	let resource = {
		let mut store = app.store.write();
		let id = draft
			.submit(&mut store)?
			.ok_or_else(|| Error::ValidationError("Resource draft is incomplete".into()))?;
		store.resource(id).cloned().ok_or(Error::NotFound)?
	};
	let persisted = app.persist_or_log().await;

	let response = CreateResourceResponse { resource, persisted };
	Ok((StatusCode::CREATED, Json(ApiResponse::new(response))))
}

/// DELETE /api/resources/{id} - Removing an absent id succeeds without effect
pub async fn delete_resource(
	State(app): State<App>,
	Path(id): Path<u64>,
) -> ClResult<(StatusCode, Json<ApiResponse<DeleteResourceResponse>>)> {
	let id = ResourceId(id);
	let removed = app.store.write().remove_resource(id);
	let persisted = !removed || app.persist_or_log().await;

	let response = DeleteResourceResponse { id, removed, persisted };
	Ok((StatusCode::OK, Json(ApiResponse::new(response))))
}

/// GET /api/blob/{blob_id}
pub async fn get_blob(
	State(app): State<App>,
	Path(blob_id): Path<String>,
) -> ClResult<Response<Body>> {
	blob_adapter::validate_blob_id(&blob_id)?;
	let data = app.blob_adapter.read_blob_buf(&blob_id).await?;

	let url = format!("{}{}", BLOB_URL_PREFIX, blob_id);
	let content_type = match app.store.read().resources().iter().find(|r| r.url == url) {
		Some(resource) if resource.resource_type == ResourceType::Pdf => "application/pdf",
		_ => "application/octet-stream",
	};

	let response = Response::builder()
		.header(header::CONTENT_TYPE, content_type)
		.header(header::CONTENT_LENGTH, data.len())
		.body(Body::from(data.into_vec()))?;
	Ok(response)
}

// vim: ts=4
