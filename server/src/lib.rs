//! Construction cost calculator server.
//!
//! Serves the browser front end and a JSON API over the settings & resource
//! store:
//!
//! - calculator settings, pricing and factor tables (read by anyone,
//!   edited by the logged-in operator)
//! - downloadable resources with file upload
//! - operator login/logout and the matching navigation links
//! - cost estimates computed from the current settings

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

// Re-export shared types and adapter traits
pub use costcalc_types::blob_adapter;
pub use costcalc_types::error;
pub use costcalc_types::types;

// Local modules
pub mod app;
pub mod auth;
pub mod estimate;
pub mod extract;
pub mod prelude;
pub mod resource;
pub mod routes;
pub mod settings;
pub mod ui;

pub use crate::app::{App, AppBuilder, AppState};

// vim: ts=4
