//! App builder - constructs and runs the calculator server

use parking_lot::RwLock;
use std::{path::Path, sync::Arc};

use costcalc_core::{AdminCredentials, SettingsStore, persist};

use crate::auth::SessionStore;
use crate::blob_adapter::BlobAdapter;
use crate::prelude::*;
use crate::routes;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upload size limit unless configured otherwise
pub const DEFAULT_MAX_UPLOAD_SIZE: usize = 32 * 1024 * 1024;

pub struct AppState {
	pub store: RwLock<SettingsStore>,
	pub sessions: SessionStore,
	pub blob_adapter: Arc<dyn BlobAdapter>,
	pub opts: AppBuilderOpts,
	// Serializes snapshot writes so they land in mutation order
	persist_lock: tokio::sync::Mutex<()>,
}

pub type App = Arc<AppState>;

impl AppState {
	/// Writes the current settings to the snapshot file, if one is configured
	pub async fn persist(&self) -> ClResult<()> {
		let Some(path) = &self.opts.settings_file else {
			return Ok(());
		};
		let _guard = self.persist_lock.lock().await;
		let snapshot = self.store.read().snapshot();
		persist::save(path, &snapshot).await
	}

	/// Persists after a mutation that is already live in memory
	///
	/// A failed write does not undo the change, so it is logged and reported
	/// to the caller as `false` instead of failing the request.
	pub async fn persist_or_log(&self) -> bool {
		match self.persist().await {
			Ok(()) => true,
			Err(err) => {
				error!("Saving settings failed, change is kept in memory only: {}", err);
				false
			}
		}
	}
}

#[derive(Debug)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
	pub dist_dir: Option<Box<Path>>,
	pub settings_file: Option<Box<Path>>,
	pub max_upload_size: usize,
}

pub struct AppBuilder {
	opts: AppBuilderOpts,
	admin: Option<AdminCredentials>,
	blob_adapter: Option<Arc<dyn BlobAdapter>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		// A second builder in the same process keeps the first subscriber
		let _ = tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.try_init();
		AppBuilder {
			opts: AppBuilderOpts {
				listen: "127.0.0.1:8080".into(),
				dist_dir: None,
				settings_file: None,
				max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
			},
			admin: None,
			blob_adapter: None,
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}
	pub fn dist_dir(&mut self, dist_dir: impl Into<Box<Path>>) -> &mut Self {
		self.opts.dist_dir = Some(dist_dir.into());
		self
	}
	pub fn settings_file(&mut self, settings_file: impl Into<Box<Path>>) -> &mut Self {
		self.opts.settings_file = Some(settings_file.into());
		self
	}
	pub fn max_upload_size(&mut self, max_upload_size: usize) -> &mut Self {
		self.opts.max_upload_size = max_upload_size;
		self
	}
	pub fn admin(&mut self, username: impl Into<Box<str>>, password: &str) -> &mut Self {
		self.admin = Some(AdminCredentials::new(username, password));
		self
	}

	// Adapters
	pub fn blob_adapter(&mut self, blob_adapter: Arc<dyn BlobAdapter>) -> &mut Self {
		self.blob_adapter = Some(blob_adapter);
		self
	}

	/// Creates the application state, restoring settings from the snapshot file
	pub async fn build(self) -> ClResult<App> {
		let blob_adapter =
			self.blob_adapter.ok_or_else(|| Error::ConfigError("No blob adapter".into()))?;

		let snapshot = match &self.opts.settings_file {
			Some(path) => persist::load(path).await?,
			None => None,
		};
		let mut store = match snapshot {
			Some(snapshot) => SettingsStore::from_snapshot(snapshot),
			None => {
				info!("Starting with default settings");
				SettingsStore::default()
			}
		};
		match self.admin {
			Some(admin) => store = store.with_admin(admin),
			None => warn!("No admin password configured, admin login is disabled"),
		}

		Ok(Arc::new(AppState {
			store: RwLock::new(store),
			sessions: SessionStore::new(),
			blob_adapter,
			opts: self.opts,
			persist_lock: tokio::sync::Mutex::new(()),
		}))
	}

	pub async fn run(self) -> ClResult<()> {
		info!("Construction cost calculator V{}", VERSION);

		let app = self.build().await?;
		let router = routes::init(app.clone());

		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
		info!("Listening on HTTP {}", app.opts.listen);
		axum::serve(listener, router).await?;

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
