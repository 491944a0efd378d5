//! Operator login and logout

pub mod handler;
pub mod session;

pub use session::SessionStore;

// vim: ts=4
