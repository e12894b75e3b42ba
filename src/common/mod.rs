//! Common types and utilities shared across swapcache.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Error types
//! - The crate-wide `Result` alias

pub mod error;

pub use error::{Error, Result};
