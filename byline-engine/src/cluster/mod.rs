//! Phase 1: partitioning the candidate pool
//!
//! Groups candidate articles into disjoint clusters, each plausibly the work
//! of one real person, before any evidence about the target identity is
//! aggregated.

pub mod clusterer;
pub mod model;

pub use clusterer::Clusterer;
pub use model::Cluster;
