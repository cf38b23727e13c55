//! Candidate-pool-size evidence
//!
//! How many records a name search returns is itself evidence: a surname
//! shared by thousands of authors makes every per-article signal less
//! trustworthy. This strategy reads the per-identity search record (fetched
//! once per run by the pipeline), derives the countable retrieval size, and
//! attaches the resulting confidence score to every article.
//!
//! Count derivation by lookup tier:
//! - lenient / strict-compound: unique identifiers across the record's
//!   batches, excluding gold-seeded retrievals and incremental refreshes;
//!   when that yields nothing, the run's own pool size stands in
//! - strict-exceeds-threshold: the search was cut off at the retrieval
//!   ceiling, so the configured ceiling itself is the count
//!
//! Score = −(count − threshold) / weight. The score is attached, not
//! aggregated: batch scoring always contributes 0 to selection.

use tracing::debug;

use byline_common::models::{Article, Identity, LookupTier, PoolEvidence, SearchRecord};
use byline_common::ScoringParams;

use crate::error::EngineResult;
use crate::types::EvidenceStrategy;

pub struct PoolSizeStrategy {
    record: Option<SearchRecord>,
    pool_size: usize,
    count_threshold: f64,
    count_weight: f64,
    lenient_ceiling: usize,
}

impl PoolSizeStrategy {
    pub fn new(record: Option<SearchRecord>, pool_size: usize, params: &ScoringParams) -> Self {
        Self {
            record,
            pool_size,
            count_threshold: params.pool_count_threshold,
            count_weight: params.pool_count_weight,
            lenient_ceiling: params.lenient_pool_ceiling,
        }
    }

    /// The retrieval count the score is derived from
    fn effective_count(&self) -> usize {
        match &self.record {
            Some(record) => match record.tier {
                LookupTier::Lenient | LookupTier::StrictCompound => {
                    let counted = record.countable_pmids().len();
                    if counted > 0 {
                        counted
                    } else {
                        self.pool_size
                    }
                }
                LookupTier::StrictExceedsThreshold => self.lenient_ceiling,
            },
            None => self.pool_size,
        }
    }

    fn score_for(&self, count: usize) -> f64 {
        -(count as f64 - self.count_threshold) / self.count_weight
    }
}

impl EvidenceStrategy for PoolSizeStrategy {
    fn name(&self) -> &'static str {
        "pool-size"
    }

    fn score_article(&self, article: &mut Article, _identity: &Identity) -> EngineResult<f64> {
        if self.pool_size > 0 {
            let count = self.effective_count();
            article.pool_evidence = Some(PoolEvidence {
                retrieved_count: count,
                score: self.score_for(count),
            });
        }
        Ok(0.0)
    }

    fn score_batch(&self, articles: &mut [Article], identity: &Identity) -> EngineResult<f64> {
        if self.pool_size == 0 {
            return Ok(0.0);
        }
        let count = self.effective_count();
        let score = self.score_for(count);
        debug!(
            retrieved_count = count,
            score, "attaching pool-size evidence"
        );
        for article in articles.iter_mut() {
            let _ = self.score_article(article, identity)?;
        }
        Ok(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byline_common::models::{RetrievalBatch, RetrievalScope};

    fn record(tier: LookupTier, batches: Vec<RetrievalBatch>) -> SearchRecord {
        SearchRecord {
            uid: "rgranste".to_string(),
            tier,
            batches,
        }
    }

    fn batch(gold_seeded: bool, scope: RetrievalScope, pmids: &[u64]) -> RetrievalBatch {
        RetrievalBatch {
            strategy: "name_search".to_string(),
            gold_seeded,
            scope,
            pmids: pmids.to_vec(),
        }
    }

    #[test]
    fn test_lenient_record_counts_unique_unseeded_pmids() {
        let record = record(
            LookupTier::Lenient,
            vec![
                batch(false, RetrievalScope::AllPublications, &[1, 2, 3]),
                batch(false, RetrievalScope::AllPublications, &[3, 4]),
                batch(true, RetrievalScope::AllPublications, &[5, 6, 7, 8]),
            ],
        );
        let params = ScoringParams::default();
        let strategy = PoolSizeStrategy::new(Some(record), 10, &params);

        let mut articles = vec![Article::new(1), Article::new(2)];
        let total = strategy
            .score_batch(&mut articles, &Identity::default())
            .unwrap();
        assert_eq!(total, 0.0);

        for article in &articles {
            let evidence = article.pool_evidence.unwrap();
            assert_eq!(evidence.retrieved_count, 4);
            // -(4 - 800) / 600
            assert!((evidence.score - 1.3266).abs() < 0.001);
        }
    }

    #[test]
    fn test_exceeds_threshold_tier_uses_ceiling() {
        let record = record(LookupTier::StrictExceedsThreshold, vec![]);
        let params = ScoringParams::default();
        let strategy = PoolSizeStrategy::new(Some(record), 10, &params);

        let mut article = Article::new(1);
        strategy.score_article(&mut article, &Identity::default()).unwrap();
        let evidence = article.pool_evidence.unwrap();
        assert_eq!(evidence.retrieved_count, 2000);
        // -(2000 - 800) / 600 = -2.0
        assert_eq!(evidence.score, -2.0);
    }

    #[test]
    fn test_missing_record_falls_back_to_pool_size() {
        let params = ScoringParams::default();
        let strategy = PoolSizeStrategy::new(None, 150, &params);

        let mut article = Article::new(1);
        strategy.score_article(&mut article, &Identity::default()).unwrap();
        let evidence = article.pool_evidence.unwrap();
        assert_eq!(evidence.retrieved_count, 150);
    }

    #[test]
    fn test_empty_pool_attaches_nothing() {
        let params = ScoringParams::default();
        let strategy = PoolSizeStrategy::new(None, 0, &params);
        let mut article = Article::new(1);
        strategy.score_article(&mut article, &Identity::default()).unwrap();
        assert!(article.pool_evidence.is_none());
    }

    #[test]
    fn test_all_batches_filtered_falls_back_to_pool_size() {
        let record = record(
            LookupTier::StrictCompound,
            vec![batch(true, RetrievalScope::AllPublications, &[1, 2, 3])],
        );
        let params = ScoringParams::default();
        let strategy = PoolSizeStrategy::new(Some(record), 42, &params);

        let mut article = Article::new(1);
        strategy.score_article(&mut article, &Identity::default()).unwrap();
        assert_eq!(article.pool_evidence.unwrap().retrieved_count, 42);
    }
}
