//! Core trait seams for the engine
//!
//! - `EvidenceStrategy`: one matching signal between an article and the
//!   target identity
//! - `SearchRecordSource`: the external search-result store the
//!   candidate-pool-size evidence reads from

use byline_common::models::{Article, Identity, SearchRecord};
use byline_common::Result;

use crate::error::EngineResult;
use crate::feature::Feature;

/// One evidence signal between an article and a target identity
///
/// Strategies never mutate the identity, are idempotent under repeated
/// invocation, and confine their side effects to appending notes to an
/// article's diagnostic trail and populating feature fields. A strategy that
/// cannot evaluate an article for lack of data returns `Ok(0.0)` — missing
/// fields are "no evidence", not errors. `Err` is reserved for internal
/// failures; callers isolate those at the scoring boundary
/// ([`crate::evidence::isolated_score`]).
pub trait EvidenceStrategy {
    /// Short token naming the signal, used in logs
    fn name(&self) -> &'static str;

    /// Score a single article against the target identity
    fn score_article(&self, article: &mut Article, identity: &Identity) -> EngineResult<f64>;

    /// Score a batch of articles; the default sums per-article scores
    fn score_batch(&self, articles: &mut [Article], identity: &Identity) -> EngineResult<f64> {
        let mut total = 0.0;
        for article in articles.iter_mut() {
            total += self.score_article(article, identity)?;
        }
        Ok(total)
    }

    /// Write this strategy's named field into a feature record
    ///
    /// Default is a no-op; only the strategies in the feature-export battery
    /// carry a field.
    fn populate_feature(&self, _article: &Article, _identity: &Identity, _feature: &mut Feature) {}
}

/// Read access to per-identity search records
///
/// Implemented by the external retrieval store. The pipeline fetches one
/// record per run and memoizes it for the run's lifetime.
pub trait SearchRecordSource: Send + Sync {
    /// Look up the search record for an identity, `None` when the identity
    /// was never searched
    fn find_by_uid(&self, uid: &str) -> Result<Option<SearchRecord>>;
}
