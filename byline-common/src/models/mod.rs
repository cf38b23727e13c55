//! Canonical data model for the disambiguation pipeline
//!
//! - Author names and the target identity profile
//! - Candidate articles with gold-standard labels and diagnostic trails
//! - Per-identity search records partitioned by lookup-strictness tier

pub mod article;
pub mod identity;
pub mod name;
pub mod search;

pub use article::{Article, GoldLabel, MeshHeading, PoolEvidence};
pub use identity::Identity;
pub use name::AuthorName;
pub use search::{LookupTier, RetrievalBatch, RetrievalScope, SearchRecord};
