//! # Byline Common Library
//!
//! Shared code for the byline disambiguation pipeline including:
//! - Canonical data model (names, identities, articles, search records)
//! - Scoring parameters and TOML loading
//! - Common error types

pub mod error;
pub mod models;
pub mod params;

pub use error::{Error, Result};
pub use params::ScoringParams;
