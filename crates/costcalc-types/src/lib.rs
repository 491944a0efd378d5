//! Shared types, adapter traits, and core utilities for the cost calculator.
//!
//! This crate holds the foundational types shared between the store crate,
//! the HTTP server and the storage adapters, so adapters do not need to
//! depend on the server.

pub mod blob_adapter;
pub mod error;
pub mod hasher;
pub mod prelude;
pub mod types;
pub mod utils;

// vim: ts=4
