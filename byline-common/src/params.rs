//! Run-wide scoring parameters
//!
//! Every threshold and weight used by the disambiguation pipeline lives in a
//! single `ScoringParams` value. The value is immutable for the duration of a
//! run and is passed explicitly into the pipeline, which threads it to every
//! strategy call. Defaults are compiled in; a TOML file may override any
//! subset of fields.

use serde::Deserialize;
use std::path::Path;

use crate::{Error, Result};

/// Scoring thresholds and weights for one disambiguation run
///
/// Construct with `ScoringParams::default()` and override fields, or load
/// from TOML with [`ScoringParams::load`] / [`ScoringParams::from_toml_str`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    /// First name-tier candidate-pool ceiling
    ///
    /// Valid range: [1, name_pool_second_tier)
    /// Default: 200
    /// Below this pool size a first-name OR middle-initial match is trusted
    pub name_pool_first_tier: usize,

    /// Second name-tier candidate-pool ceiling
    ///
    /// Valid range: (name_pool_first_tier, 100000]
    /// Default: 500
    /// Below this pool size a first-name AND middle-initial match is trusted
    pub name_pool_second_tier: usize,

    /// Minimum co-author overlap for cluster membership
    ///
    /// Valid range: [1.0, 100.0]
    /// Default: 1.0
    /// An article joins a cluster only if it shares at least this many
    /// non-target co-authors with some member
    pub cluster_similarity_threshold: f64,

    /// Cluster selection decision threshold
    ///
    /// Valid range: [0.0, 1000.0]
    /// Default: 1.0
    /// A cluster is selected when its aggregate evidence score exceeds this
    pub cluster_selection_threshold: f64,

    /// Topical-overlap recovery threshold
    ///
    /// Valid range: [0.0, 1.0]
    /// Default: 0.5
    /// An unselected cluster is recovered when the fraction of its major
    /// descriptors found in the confirmed-selection profile exceeds this
    pub mesh_overlap_threshold: f64,

    /// Candidate-pool count threshold
    ///
    /// Valid range: [1.0, 100000.0]
    /// Default: 800.0
    /// Retrieval counts above this contribute negative pool-size evidence
    pub pool_count_threshold: f64,

    /// Candidate-pool count weight
    ///
    /// Valid range: (0.0, 100000.0]
    /// Default: 600.0
    /// Divisor converting the count excess into a score; larger values
    /// flatten the penalty
    pub pool_count_weight: f64,

    /// Retrieval ceiling imputed to the strict-exceeds-threshold lookup tier
    ///
    /// Valid range: [1, 1000000]
    /// Default: 2000
    /// When a lenient search was abandoned for exceeding this many results,
    /// the ceiling itself stands in for the unretrieved count
    pub lenient_pool_ceiling: usize,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            name_pool_first_tier: 200,
            name_pool_second_tier: 500,
            cluster_similarity_threshold: 1.0,
            cluster_selection_threshold: 1.0,
            mesh_overlap_threshold: 0.5,
            pool_count_threshold: 800.0,
            pool_count_weight: 600.0,
            lenient_pool_ceiling: 2000,
        }
    }
}

impl ScoringParams {
    /// Parse parameters from a TOML string, validating ranges
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let params: ScoringParams = toml::from_str(content)
            .map_err(|e| Error::Config(format!("invalid scoring parameters: {}", e)))?;
        params.validate()?;
        Ok(params)
    }

    /// Load parameters from a TOML file, validating ranges
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check that every field is inside its documented range
    pub fn validate(&self) -> Result<()> {
        if self.name_pool_first_tier == 0 {
            return Err(Error::Config(
                "name_pool_first_tier must be at least 1".to_string(),
            ));
        }
        if self.name_pool_second_tier <= self.name_pool_first_tier {
            return Err(Error::Config(format!(
                "name_pool_second_tier ({}) must exceed name_pool_first_tier ({})",
                self.name_pool_second_tier, self.name_pool_first_tier
            )));
        }
        if self.cluster_similarity_threshold < 1.0 {
            return Err(Error::Config(
                "cluster_similarity_threshold must be at least 1.0".to_string(),
            ));
        }
        if self.cluster_selection_threshold < 0.0 {
            return Err(Error::Config(
                "cluster_selection_threshold must not be negative".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mesh_overlap_threshold) {
            return Err(Error::Config(
                "mesh_overlap_threshold must be within [0.0, 1.0]".to_string(),
            ));
        }
        if self.pool_count_weight <= 0.0 {
            return Err(Error::Config(
                "pool_count_weight must be positive".to_string(),
            ));
        }
        if self.lenient_pool_ceiling == 0 {
            return Err(Error::Config(
                "lenient_pool_ceiling must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
