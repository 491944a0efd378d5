//! Settings snapshot file
//!
//! The full settings record (resources included) is written as one JSON
//! document. Writes go to a temp file next to the target which is then
//! renamed over it, so readers see either the old or the new snapshot.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::{
	fs::{File, create_dir_all, remove_file, rename},
	io::AsyncWriteExt,
};

use crate::prelude::*;
use crate::settings::Settings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
	pub settings: Settings,
	/// Next id the store hands out
	#[serde(default)]
	pub next_resource_id: u64,
}

fn tmp_path(path: &Path) -> ClResult<PathBuf> {
	let file_name = path
		.file_name()
		.ok_or_else(|| Error::ConfigError(format!("Invalid settings file path: {:?}", path)))?;
	let mut tmp_name = file_name.to_os_string();
	tmp_name.push(".tmp");
	Ok(path.with_file_name(tmp_name))
}

/// Reads a snapshot, `None` if the file does not exist yet
pub async fn load(path: &Path) -> ClResult<Option<Snapshot>> {
	let data = match tokio::fs::read(path).await {
		Ok(data) => data,
		Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
			debug!("No settings snapshot at {:?}", path);
			return Ok(None);
		}
		Err(err) => return Err(err.into()),
	};

	let snapshot: Snapshot = serde_json::from_slice(&data)?;
	let mut seen = HashSet::new();
	if let Some(dup) = snapshot.settings.resources.iter().find(|r| !seen.insert(r.id)) {
		return Err(Error::ValidationError(format!(
			"Settings snapshot {:?} contains resource id {} twice",
			path, dup.id
		)));
	}
	if let Some(last) = snapshot.settings.resources.iter().find(|r| r.id.0 == u64::MAX) {
		return Err(Error::ValidationError(format!(
			"Settings snapshot {:?} contains resource id {} which leaves no room for new ids",
			path, last.id
		)));
	}
	if snapshot.next_resource_id == u64::MAX {
		return Err(Error::ValidationError(format!(
			"Settings snapshot {:?} has an exhausted nextResourceId",
			path
		)));
	}

	info!(
		"Loaded settings snapshot from {:?} ({} resources)",
		path,
		snapshot.settings.resources.len()
	);
	Ok(Some(snapshot))
}

/// Atomically replaces the snapshot file
pub async fn save(path: &Path, snapshot: &Snapshot) -> ClResult<()> {
	let data = serde_json::to_vec_pretty(snapshot)?;
	if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
		create_dir_all(dir).await?;
	}

	let tmp_path = tmp_path(path)?;
	let res = async {
		let mut file = File::create(&tmp_path).await?;
		file.write_all(&data).await?;
		file.sync_all().await?;
		rename(&tmp_path, path).await?;
		Ok::<(), Error>(())
	}
	.await;

	if let Err(err) = res {
		warn!("Saving settings snapshot failed, removing tmpfile: {:?}", &tmp_path);
		let _ = remove_file(&tmp_path).await;
		return Err(err);
	}

	debug!("Saved settings snapshot to {:?}", path);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::resource::{Resource, ResourceInput, ResourceType};
	use tempfile::TempDir;

	fn snapshot() -> Snapshot {
		let mut settings = Settings::default();
		settings.price_per_sq_ft = 2_100.0;
		settings.resources.push(Resource::new(
			ResourceId(1),
			ResourceInput {
				title: "Guide".into(),
				description: "d".into(),
				category: "Checklists".into(),
				resource_type: ResourceType::Pdf,
				url: "/api/blob/b1~abcd".into(),
			},
		));
		Snapshot { settings, next_resource_id: 5 }
	}

	#[tokio::test]
	async fn test_missing_file_is_none() {
		let dir = TempDir::new().unwrap();
		assert!(load(&dir.path().join("settings.json")).await.unwrap().is_none());
	}

	#[tokio::test]
	async fn test_save_and_load() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("nested").join("settings.json");

		save(&path, &snapshot()).await.unwrap();
		assert!(!dir.path().join("nested").join("settings.json.tmp").exists());

		let loaded = load(&path).await.unwrap().unwrap();
		assert_eq!(loaded, snapshot());
	}

	#[tokio::test]
	async fn test_save_replaces_previous() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("settings.json");

		save(&path, &snapshot()).await.unwrap();
		let mut second = snapshot();
		second.settings.resources.clear();
		save(&path, &second).await.unwrap();

		assert!(load(&path).await.unwrap().unwrap().settings.resources.is_empty());
	}

	#[tokio::test]
	async fn test_load_rejects_duplicate_ids() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("settings.json");
		let mut snap = snapshot();
		let dup = snap.settings.resources[0].clone();
		snap.settings.resources.push(dup);
		tokio::fs::write(&path, serde_json::to_vec(&snap).unwrap()).await.unwrap();

		assert!(matches!(load(&path).await, Err(Error::ValidationError(_))));
	}

	#[tokio::test]
	async fn test_load_rejects_ids_that_cannot_advance() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("settings.json");

		let mut snap = snapshot();
		snap.settings.resources[0].id = ResourceId(u64::MAX);
		tokio::fs::write(&path, serde_json::to_vec(&snap).unwrap()).await.unwrap();
		assert!(matches!(load(&path).await, Err(Error::ValidationError(_))));

		let mut snap = snapshot();
		snap.next_resource_id = u64::MAX;
		tokio::fs::write(&path, serde_json::to_vec(&snap).unwrap()).await.unwrap();
		assert!(matches!(load(&path).await, Err(Error::ValidationError(_))));
	}

	#[tokio::test]
	async fn test_load_rejects_garbage() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("settings.json");
		tokio::fs::write(&path, b"{ not json").await.unwrap();

		assert!(matches!(load(&path).await, Err(Error::Json(_))));
	}
}

// vim: ts=4
