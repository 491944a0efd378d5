//! Navigation and admin panel layout

pub mod handler;

// vim: ts=4
