//! # Byline Disambiguation Engine
//!
//! Author name disambiguation: given a researcher's identity profile and a
//! pool of candidate articles retrieved by a name search, decide which
//! articles the researcher actually wrote.
//!
//! # Architecture
//!
//! The pipeline runs in two phases over one identity's candidate pool:
//! - **Phase 1 (clustering)**: partition the pool into disjoint groups, each
//!   plausibly one real person, using co-author overlap and name-variant
//!   consistency. Known-true identifiers seed the first cluster when
//!   available.
//! - **Phase 2 (selection)**: score each cluster with a battery of evidence
//!   strategies and select clusters whose aggregate evidence clears a
//!   threshold, then recover weakly-evidenced clusters whose major topics
//!   overlap the confirmed selection.
//!
//! Evaluation against the curated gold standard produces a confusion matrix,
//! per-journal breakdowns, and per-article diagnostics.
//!
//! The engine is synchronous and free of global state; distinct identity
//! runs share nothing and may be driven in parallel by the caller.

pub mod analysis;
pub mod cluster;
pub mod error;
pub mod evidence;
pub mod feature;
pub mod pipeline;
pub mod selection;
pub mod types;

pub use error::{EngineError, EngineResult};
pub use pipeline::{Pipeline, RunInput, RunOutput};
