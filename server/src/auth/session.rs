//! Bearer tokens of logged-in operators

use parking_lot::RwLock;
use std::collections::HashSet;

use costcalc_types::utils::random_token;

#[derive(Debug, Default)]
pub struct SessionStore {
	tokens: RwLock<HashSet<Box<str>>>,
}

impl SessionStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Issues a fresh token
	pub fn create(&self) -> Box<str> {
		let token: Box<str> = random_token().into();
		self.tokens.write().insert(token.clone());
		token
	}

	pub fn contains(&self, token: &str) -> bool {
		self.tokens.read().contains(token)
	}

	/// Revokes a token, false if it was not issued or already revoked
	pub fn revoke(&self, token: &str) -> bool {
		self.tokens.write().remove(token)
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.read().is_empty()
	}
}


// vim: ts=4
