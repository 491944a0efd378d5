//! Admin credentials check
//!
//! Only a single operator account exists. Its password is kept as a SHA-256
//! digest so the plain text does not stay in memory after startup.

use serde::Deserialize;
use sha2::{Digest, Sha256};

/// Login request as sent by the login page
#[derive(Clone, Deserialize)]
pub struct Credentials {
	pub username: String,
	pub password: String,
}

impl Credentials {
	pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
		Self { username: username.into(), password: password.into() }
	}
}

impl std::fmt::Debug for Credentials {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Credentials")
			.field("username", &self.username)
			.field("password", &"<redacted>")
			.finish()
	}
}

/// The configured operator account
#[derive(Clone)]
pub struct AdminCredentials {
	username: Box<str>,
	password_hash: [u8; 32],
}

fn digest(password: &str) -> [u8; 32] {
	Sha256::digest(password.as_bytes()).into()
}

impl AdminCredentials {
	pub fn new(username: impl Into<Box<str>>, password: &str) -> Self {
		Self { username: username.into(), password_hash: digest(password) }
	}

	pub fn username(&self) -> &str {
		&self.username
	}

	pub fn verify(&self, credentials: &Credentials) -> bool {
		let candidate = digest(&credentials.password);
		// Compare every byte so timing does not depend on the first mismatch
		let diff = candidate
			.iter()
			.zip(self.password_hash.iter())
			.fold(0u8, |acc, (a, b)| acc | (a ^ b));
		diff == 0 && *self.username == credentials.username
	}
}

impl std::fmt::Debug for AdminCredentials {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AdminCredentials").field("username", &self.username).finish_non_exhaustive()
	}
}


// vim: ts=4
