//! Starlog Core - shared types for conventional-commit tooling
//!
//! This crate provides the error types and configuration system used by the
//! parsing, changelog, and git crates.

pub mod config;
pub mod error;

pub use config::{Config, TaxonomyConfig};
pub use error::{Result, StarlogError};
