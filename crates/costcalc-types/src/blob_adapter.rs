//! Adapter that stores uploaded files.
//!
//! Blobs are content-addressed: the id is derived from the bytes, so storing
//! the same file twice yields the same id.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::prelude::*;

/// URL prefix under which stored blobs are served
pub const BLOB_URL_PREFIX: &str = "/api/blob/";

/// What the upload collaborator hands back for a selected file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadHandle {
	pub blob_id: Box<str>,
	pub file_name: Box<str>,
	pub size: u64,
	pub url: Box<str>,
}

impl UploadHandle {
	pub fn new(blob_id: impl Into<Box<str>>, file_name: impl Into<Box<str>>, size: u64) -> Self {
		let blob_id = blob_id.into();
		let url = format!("{}{}", BLOB_URL_PREFIX, blob_id).into();
		Self { blob_id, file_name: file_name.into(), size, url }
	}
}

/// Checks that a blob id has the `<prefix>1~<hash>` shape
pub fn validate_blob_id(blob_id: &str) -> ClResult<()> {
	let hash_start = blob_id.find('~').ok_or(Error::Parse)? + 1;
	let hash = &blob_id[hash_start..];
	if hash.len() < 4 || !hash.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
		return Err(Error::Parse);
	}
	Ok(())
}

#[async_trait]
pub trait BlobAdapter: Debug + Send + Sync {
	/// Stores a blob from a buffer, returns its content-derived id
	async fn create_blob_buf(&self, data: &[u8]) -> ClResult<Box<str>>;

	/// Checks if a blob exists, returns its size
	async fn stat_blob(&self, blob_id: &str) -> Option<u64>;

	/// Reads a blob
	async fn read_blob_buf(&self, blob_id: &str) -> ClResult<Box<[u8]>>;

	/// Stores an uploaded file and returns the handle pointing at it
	async fn upload(&self, file_name: &str, data: &[u8]) -> ClResult<UploadHandle> {
		let blob_id = self.create_blob_buf(data).await?;
		Ok(UploadHandle::new(blob_id, file_name, data.len() as u64))
	}
}


// vim: ts=4
