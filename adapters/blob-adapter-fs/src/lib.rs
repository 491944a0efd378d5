//! Filesystem blob adapter
//!
//! Blobs live under `<base_dir>/<h0h1>/<h2h3>/<blob_id>` where `h0..h3` are
//! the first characters of the hash part of the id. Writes go through a temp
//! file which is renamed into place once complete.

use std::{
	fmt::Debug,
	path::{Path, PathBuf},
	sync::atomic::{AtomicU64, Ordering},
};

use async_trait::async_trait;
use tokio::{
	fs::{File, create_dir_all, metadata, remove_file, rename},
	io::{AsyncReadExt, AsyncWriteExt},
};

use costcalc_types::{
	blob_adapter::{self, validate_blob_id},
	hasher,
	prelude::*,
};

/// Calculates the path of the directory for a blob
fn obj_dir(base_dir: &Path, blob_id: &str) -> ClResult<PathBuf> {
	validate_blob_id(blob_id)?;
	let hash_start = blob_id.find('~').ok_or(Error::Parse)? + 1;

	Ok(PathBuf::from(base_dir)
		.join(&blob_id[hash_start..hash_start + 2])
		.join(&blob_id[hash_start + 2..hash_start + 4]))
}

fn obj_file_path(base_dir: &Path, blob_id: &str) -> ClResult<PathBuf> {
	Ok(obj_dir(base_dir, blob_id)?.join(blob_id))
}

#[derive(Debug)]
pub struct BlobAdapterFs {
	base_dir: Box<Path>,
	tmp_seq: AtomicU64,
}

impl BlobAdapterFs {
	pub async fn new(base_dir: Box<Path>) -> Result<Self, Error> {
		create_dir_all(&base_dir).await?;
		Ok(Self { base_dir, tmp_seq: AtomicU64::new(0) })
	}

	fn tmp_file_path(&self) -> PathBuf {
		let seq = self.tmp_seq.fetch_add(1, Ordering::Relaxed);
		self.base_dir.join(format!("tmp-{}-{}", std::process::id(), seq))
	}
}

#[async_trait]
impl blob_adapter::BlobAdapter for BlobAdapterFs {
	/// Creates a new blob from a buffer
	async fn create_blob_buf(&self, data: &[u8]) -> ClResult<Box<str>> {
		let blob_id = hasher::hash("b", data);
		let path = obj_file_path(&self.base_dir, &blob_id)?;
		if metadata(&path).await.is_ok() {
			debug!("create_blob_buf: {} already stored", blob_id);
			return Ok(blob_id);
		}

		info!("create_blob_buf: {:?} ({} bytes)", path, data.len());
		create_dir_all(obj_dir(&self.base_dir, &blob_id)?).await?;

		let tmp_path = self.tmp_file_path();
		let res = async {
			let mut file = File::create(&tmp_path).await?;
			file.write_all(data).await?;
			file.sync_all().await?;
			rename(&tmp_path, &path).await?;
			Ok::<(), Error>(())
		}
		.await;
		if let Err(err) = res {
			warn!("create_blob_buf failed, removing tmpfile: {:?}", &tmp_path);
			let _ = remove_file(&tmp_path).await;
			return Err(err);
		}

		Ok(blob_id)
	}

	/// Checks if a blob exists, returns its size
	async fn stat_blob(&self, blob_id: &str) -> Option<u64> {
		let path = obj_file_path(&self.base_dir, blob_id).ok()?;
		let file_metadata = metadata(&path).await.ok()?;
		Some(file_metadata.len())
	}

	/// Reads a blob
	async fn read_blob_buf(&self, blob_id: &str) -> ClResult<Box<[u8]>> {
		let path = obj_file_path(&self.base_dir, blob_id)?;
		let mut file = File::open(&path).await.map_err(|err| {
			if err.kind() == std::io::ErrorKind::NotFound { Error::NotFound } else { err.into() }
		})?;
		let mut buf: Vec<u8> = Vec::new();
		file.read_to_end(&mut buf).await?;

		Ok(buf.into_boxed_slice())
	}
}


// vim: ts=4
