//! Evidence strategy framework
//!
//! Each strategy scores one matching signal between an article and the
//! target identity (see [`crate::types::EvidenceStrategy`]). Strategies are
//! independent of one another; the only staged one is the topical-overlap
//! strategy, which consumes the confirmed selection and therefore runs after
//! the primary selection pass.
//!
//! Scoring failures are isolated here: [`isolated_score`] converts a
//! strategy error into a logged zero contribution so one broken signal never
//! aborts its siblings or the run.

pub mod affiliation;
pub mod certification;
pub mod department;
pub mod email;
pub mod mesh;
pub mod name;
pub mod pool;
pub mod relationship;

pub use affiliation::{AffiliationStrategy, IndexAffiliationStrategy};
pub use certification::CertificationStrategy;
pub use department::DepartmentStrategy;
pub use email::EmailStrategy;
pub use mesh::{DescriptorProfile, MeshMajorStrategy};
pub use name::NameTierStrategy;
pub use pool::PoolSizeStrategy;
pub use relationship::RelationshipStrategy;

use tracing::warn;

use byline_common::models::{Article, Identity};
use byline_common::ScoringParams;

use crate::types::EvidenceStrategy;

/// Case-insensitive substring test; empty needles never match
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.trim().is_empty() {
        return false;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Score a batch at the strategy boundary: an internal failure is logged and
/// contributes zero, never aborting sibling strategies or the run
pub fn isolated_score(
    strategy: &dyn EvidenceStrategy,
    articles: &mut [Article],
    identity: &Identity,
) -> f64 {
    match strategy.score_batch(articles, identity) {
        Ok(score) => score,
        Err(e) => {
            warn!(
                strategy = strategy.name(),
                error = %e,
                "strategy failed, scoring zero"
            );
            0.0
        }
    }
}

/// The fixed battery populating feature records for offline export
pub fn feature_battery() -> Vec<Box<dyn EvidenceStrategy>> {
    vec![
        Box::new(EmailStrategy),
        Box::new(DepartmentStrategy),
        Box::new(RelationshipStrategy),
        Box::new(AffiliationStrategy),
        Box::new(IndexAffiliationStrategy),
    ]
}

/// The battery aggregated by cluster selection
///
/// Extends the export battery with the pool-size-gated name tiers and
/// certification matching. The topical-overlap strategy is deliberately
/// absent: it runs only in the recovery pass, against the profile built from
/// the primary selection.
pub fn selection_battery(pool_size: usize, params: &ScoringParams) -> Vec<Box<dyn EvidenceStrategy>> {
    let mut battery = feature_battery();
    battery.push(Box::new(NameTierStrategy::new(pool_size, params)));
    battery.push(Box::new(CertificationStrategy));
    battery
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::EngineResult;

    struct FailingStrategy;

    impl EvidenceStrategy for FailingStrategy {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn score_article(&self, _: &mut Article, _: &Identity) -> EngineResult<f64> {
            Err(EngineError::Strategy {
                name: "failing",
                message: "simulated internal failure".to_string(),
            })
        }
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Department of Dermatology", "dermatology"));
        assert!(!contains_ignore_case("Department of Dermatology", "cardiology"));
        assert!(!contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("anything", "   "));
    }

    #[test]
    fn test_isolated_score_converts_failure_to_zero() {
        let mut articles = vec![Article::new(1), Article::new(2)];
        let identity = Identity::default();
        let score = isolated_score(&FailingStrategy, &mut articles, &identity);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_battery_composition() {
        assert_eq!(feature_battery().len(), 5);
        let battery = selection_battery(100, &ScoringParams::default());
        assert_eq!(battery.len(), 7);
        let names: Vec<&str> = battery.iter().map(|s| s.name()).collect();
        assert!(names.contains(&"name-tier"));
        assert!(names.contains(&"certification"));
        assert!(!names.contains(&"mesh-major"));
    }
}
