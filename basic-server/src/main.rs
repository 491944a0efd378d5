use std::{env, path, sync::Arc};

use costcalc::AppBuilder;
use costcalc::error::{ClResult, Error};
use costcalc_blob_adapter_fs::BlobAdapterFs;
use tracing::info;

pub struct Config {
	pub listen: String,
	pub data_dir: path::PathBuf,
	pub dist_dir: Option<path::PathBuf>,
	pub settings_file: path::PathBuf,
	pub admin_user: String,
	pub admin_password: Option<String>,
	pub max_upload_size: Option<usize>,
}

impl Config {
	fn from_env() -> ClResult<Self> {
		let data_dir = path::PathBuf::from(env::var("DATA_DIR").unwrap_or("./data".to_string()));
		let settings_file = env::var("SETTINGS_FILE")
			.map_or_else(|_| data_dir.join("settings.json"), path::PathBuf::from);
		let max_upload_size = env::var("MAX_UPLOAD_SIZE")
			.ok()
			.map(|size| {
				size.parse()
					.map_err(|_| Error::ConfigError(format!("Invalid MAX_UPLOAD_SIZE: {}", size)))
			})
			.transpose()?;

		Ok(Config {
			listen: env::var("LISTEN").unwrap_or("127.0.0.1:8080".to_string()),
			dist_dir: env::var("DIST_DIR").ok().map(path::PathBuf::from),
			settings_file,
			admin_user: env::var("ADMIN_USER").unwrap_or("admin".to_string()),
			admin_password: env::var("ADMIN_PASSWORD").ok().filter(|pw| !pw.is_empty()),
			max_upload_size,
			data_dir,
		})
	}
}

#[tokio::main]
async fn main() -> ClResult<()> {
	let config = Config::from_env()?;

	let blob_adapter = BlobAdapterFs::new(config.data_dir.join("blob").into()).await?;

	let mut builder = AppBuilder::new();
	builder
		.listen(config.listen)
		.settings_file(config.settings_file)
		.blob_adapter(Arc::new(blob_adapter));
	if let Some(dist_dir) = config.dist_dir {
		builder.dist_dir(dist_dir);
	}
	if let Some(password) = &config.admin_password {
		builder.admin(config.admin_user, password);
	}
	if let Some(max_upload_size) = config.max_upload_size {
		builder.max_upload_size(max_upload_size);
	}

	info!("Data directory: {:?}", config.data_dir);
	builder.run().await
}

// vim: ts=4
