//! Per-identity search-result records
//!
//! The retrieval layer (external) records, for each identity, which lookup
//! strictness tier it settled on and the identifier batches each retrieval
//! strategy produced. The engine only reads these records, to derive
//! candidate-pool-size evidence.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How strict the name query that produced a search record was
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupTier {
    /// Broad name query; counts are trustworthy
    Lenient,
    /// Compound-name query used when the lenient form is ambiguous
    StrictCompound,
    /// Lenient query abandoned after exceeding the retrieval ceiling; the
    /// true count is unknown and the ceiling stands in for it
    StrictExceedsThreshold,
}

/// Whether a retrieval batch covered the whole record or only new additions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalScope {
    AllPublications,
    IncrementalOnly,
}

/// One batch of identifiers produced by a single retrieval strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalBatch {
    /// Name of the retrieval strategy that issued the query
    pub strategy: String,

    /// Batch was seeded from the curated gold-standard list rather than a
    /// name search; such identifiers say nothing about name ambiguity
    pub gold_seeded: bool,

    pub scope: RetrievalScope,

    pub pmids: Vec<u64>,
}

/// Search-result record for one identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRecord {
    pub uid: String,
    pub tier: LookupTier,
    pub batches: Vec<RetrievalBatch>,
}

impl SearchRecord {
    /// Unique identifiers that measure name ambiguity: gold-seeded batches
    /// and incremental refreshes are excluded
    pub fn countable_pmids(&self) -> BTreeSet<u64> {
        self.batches
            .iter()
            .filter(|b| !b.gold_seeded && b.scope == RetrievalScope::AllPublications)
            .flat_map(|b| b.pmids.iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(strategy: &str, gold_seeded: bool, scope: RetrievalScope, pmids: &[u64]) -> RetrievalBatch {
        RetrievalBatch {
            strategy: strategy.to_string(),
            gold_seeded,
            scope,
            pmids: pmids.to_vec(),
        }
    }

    #[test]
    fn test_countable_pmids_unions_and_dedupes() {
        let record = SearchRecord {
            uid: "rgranste".to_string(),
            tier: LookupTier::Lenient,
            batches: vec![
                batch("last_first", false, RetrievalScope::AllPublications, &[1, 2, 3]),
                batch("full_name", false, RetrievalScope::AllPublications, &[3, 4]),
            ],
        };
        let counted = record.countable_pmids();
        assert_eq!(counted.len(), 4);
        assert!(counted.contains(&1) && counted.contains(&4));
    }

    #[test]
    fn test_countable_pmids_skips_gold_seeded_and_incremental() {
        let record = SearchRecord {
            uid: "rgranste".to_string(),
            tier: LookupTier::StrictCompound,
            batches: vec![
                batch("last_first", false, RetrievalScope::AllPublications, &[10, 11]),
                batch("gold_seed", true, RetrievalScope::AllPublications, &[12, 13, 14]),
                batch("refresh", false, RetrievalScope::IncrementalOnly, &[15]),
            ],
        };
        let counted = record.countable_pmids();
        assert_eq!(counted, BTreeSet::from([10, 11]));
    }
}
