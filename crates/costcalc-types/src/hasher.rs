//! Hasher format for content-addressing uploaded files.

use base64::Engine;
use sha2::{Digest, Sha256};

pub enum Hasher {
	V1(Sha256),
}

impl Hasher {
	pub fn new() -> Self {
		Self::V1(Sha256::new())
	}

	pub fn update(&mut self, data: &[u8]) {
		match self {
			Self::V1(hasher) => hasher.update(data),
		}
	}

	/// Produces `<prefix>1~<base64url(sha256)>`
	pub fn finalize(self, prefix: &str) -> String {
		match self {
			Self::V1(hasher) => {
				let digest = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(hasher.finalize());
				format!("{}1~{}", prefix, digest)
			}
		}
	}
}

impl Default for Hasher {
	fn default() -> Self {
		Self::new()
	}
}

pub fn hash(prefix: &str, data: &[u8]) -> Box<str> {
	let mut hasher = Hasher::new();
	hasher.update(data);
	hasher.finalize(prefix).into()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_hash_format() {
		let id = hash("b", b"hello");
		assert!(id.starts_with("b1~"));
		// 32 bytes of sha256 in unpadded base64url
		assert_eq!(id.len(), 3 + 43);
	}

	#[test]
	fn test_hash_is_stable() {
		let mut hasher = Hasher::new();
		hasher.update(b"hel");
		hasher.update(b"lo");
		assert_eq!(hasher.finalize("b").as_str(), &*hash("b", b"hello"));
	}
}

// vim: ts=4
