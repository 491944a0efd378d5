//! Shared helpers for the HTTP API tests

#![allow(dead_code)]

use axum::{
	Router,
	body::Body,
	http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tower::ServiceExt;

use costcalc::{App, AppBuilder, routes};
use costcalc_blob_adapter_fs::BlobAdapterFs;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "secret";
pub const BOUNDARY: &str = "costcalc-test-boundary";

pub struct TestServer {
	pub app: App,
	pub router: Router,
	pub dir: TempDir,
	/// Bearer token attached to every request once logged in
	token: Mutex<Option<String>>,
}

impl TestServer {
	pub async fn new() -> Self {
		let dir = TempDir::new().unwrap();
		Self::with_dir(dir).await
	}

	/// Starts a server over an existing data directory
	pub async fn with_dir(dir: TempDir) -> Self {
		let settings_file = dir.path().join("settings.json");
		Self::with_settings_file(dir, &settings_file).await
	}

	pub async fn with_settings_file(dir: TempDir, settings_file: &Path) -> Self {
		let blob_adapter = BlobAdapterFs::new(dir.path().join("blob").into()).await.unwrap();
		let mut builder = AppBuilder::new();
		builder
			.blob_adapter(Arc::new(blob_adapter))
			.settings_file(settings_file)
			.admin(ADMIN_USER, ADMIN_PASSWORD);
		let app = builder.build().await.unwrap();
		let router = routes::init(app.clone());
		Self { app, router, dir, token: Mutex::new(None) }
	}

	/// A second client of the same server, without the session token
	pub fn anonymous(&self) -> Self {
		let dir = TempDir::new().unwrap();
		Self { app: self.app.clone(), router: self.router.clone(), dir, token: Mutex::new(None) }
	}

	pub fn token(&self) -> Option<String> {
		self.token.lock().unwrap().clone()
	}

	pub fn set_token(&self, token: Option<String>) {
		*self.token.lock().unwrap() = token;
	}

	pub async fn send(&self, mut req: Request<Body>) -> (StatusCode, Value) {
		if let Some(token) = self.token() {
			req.headers_mut()
				.insert(header::AUTHORIZATION, format!("Bearer {}", token).parse().unwrap());
		}
		let res = self.router.clone().oneshot(req).await.unwrap();
		let status = res.status();
		let bytes = res.into_body().collect().await.unwrap().to_bytes();
		let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
		(status, body)
	}

	pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
		self.send(Request::get(uri).body(Body::empty()).unwrap()).await
	}

	pub async fn json(&self, method: Method, uri: &str, body: &Value) -> (StatusCode, Value) {
		let req = Request::builder()
			.method(method)
			.uri(uri)
			.header(header::CONTENT_TYPE, "application/json")
			.body(Body::from(body.to_string()))
			.unwrap();
		self.send(req).await
	}

	pub async fn login(&self) {
		let creds = serde_json::json!({ "username": ADMIN_USER, "password": ADMIN_PASSWORD });
		let (status, body) = self.json(Method::POST, "/api/auth/login", &creds).await;
		assert_eq!(status, StatusCode::OK);
		self.set_token(Some(body["data"]["token"].as_str().unwrap().to_string()));
	}

	pub async fn upload(&self, fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> (StatusCode, Value) {
		let req = Request::post("/api/resources")
			.header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={}", BOUNDARY))
			.body(Body::from(multipart_body(fields, file)))
			.unwrap();
		self.send(req).await
	}
}

/// Builds a multipart/form-data body with text fields and an optional file
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
	let mut body = Vec::new();
	for (name, value) in fields {
		body.extend_from_slice(
			format!(
				"--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
				BOUNDARY, name, value
			)
			.as_bytes(),
		);
	}
	if let Some((file_name, data)) = file {
		body.extend_from_slice(
			format!(
				"--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: application/pdf\r\n\r\n",
				BOUNDARY, file_name
			)
			.as_bytes(),
		);
		body.extend_from_slice(data);
		body.extend_from_slice(b"\r\n");
	}
	body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
	body
}

// vim: ts=4
