//! Calculator settings: pricing, assumptions and factor tables

pub mod handler;

// vim: ts=4
