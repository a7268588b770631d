//! Core data types for modpin.
//!
//! This crate defines what a resolution request and its answer look like
//! (dependencies and modules), the registry entry shape, the [`Registry`]
//! read capability with its in-memory implementation, and the optional
//! `modpin.toml` configuration.
//!
//! This crate is intentionally free of async code and network I/O.
//!
//! [`Registry`]: registry::Registry

pub mod config;
pub mod dependency;
pub mod module;
pub mod registry;
