//! Settings & resource store of the construction cost calculator.
//!
//! The store is a plain owned value: the application root creates one and
//! hands references to whoever renders or mutates it. Everything else in
//! this crate (estimator, admin panel draft, navbar links, snapshot
//! persistence) is built on top of the store's read/update operations.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod auth;
pub mod draft;
pub mod estimate;
pub mod nav;
pub mod persist;
pub mod prelude;
pub mod resource;
pub mod settings;
pub mod store;

pub use auth::{AdminCredentials, Credentials};
pub use resource::{Resource, ResourceInput, ResourceType};
pub use settings::{Assumptions, LocationTier, QualityTier, Settings, SettingsPatch};
pub use store::SettingsStore;

// vim: ts=4
