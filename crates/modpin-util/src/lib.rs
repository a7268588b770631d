//! Shared utilities for modpin.
//!
//! This crate provides cross-cutting concerns used by the other modpin crates:
//! the unified error type, filesystem helpers, and terminal status lines.

pub mod errors;
pub mod fs;
pub mod progress;
