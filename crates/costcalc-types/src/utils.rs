//! Utility functions

use rand::RngExt;

pub const TOKEN_LENGTH: usize = 32;
const SAFE: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Random alphanumeric token, usable in headers and URLs as is
pub fn random_token() -> String {
	let mut rng = rand::rng();
	(0..TOKEN_LENGTH).map(|_| char::from(SAFE[rng.random_range(0..SAFE.len())])).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_random_token() {
		let a = random_token();
		let b = random_token();
		assert_eq!(a.len(), TOKEN_LENGTH);
		assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
		assert_ne!(a, b);
	}
}

// vim: ts=4
