//! Pool-size-gated name matching
//!
//! How much a name match is worth depends on how ambiguous the name is. A
//! search that returned 150 candidates is a narrow namespace where a bare
//! first-name or middle-initial match is trustworthy; one that returned
//! thousands is not. Two tiers, both gated on the candidate-pool size N:
//!
//! - first tier (N below `name_pool_first_tier`): the co-author's first name
//!   matches the target's exactly (case-insensitive) OR their non-empty
//!   middle initials match
//! - second tier (N below `name_pool_second_tier`): the first name AND a
//!   non-empty middle initial both match
//!
//! Either tier firing scores 1; otherwise 0. Holding the name facts fixed, a
//! smaller pool can only turn the signal on, never off.

use byline_common::models::{Article, Identity};
use byline_common::ScoringParams;

use crate::error::EngineResult;
use crate::types::EvidenceStrategy;

/// Name evidence gated by candidate-pool size
pub struct NameTierStrategy {
    pool_size: usize,
    first_tier: usize,
    second_tier: usize,
}

impl NameTierStrategy {
    /// `pool_size` is the number of candidates in the current run
    pub fn new(pool_size: usize, params: &ScoringParams) -> Self {
        Self {
            pool_size,
            first_tier: params.name_pool_first_tier,
            second_tier: params.name_pool_second_tier,
        }
    }
}

impl EvidenceStrategy for NameTierStrategy {
    fn name(&self) -> &'static str {
        "name-tier"
    }

    fn score_article(&self, article: &mut Article, identity: &Identity) -> EngineResult<f64> {
        let target = &identity.primary_name;
        let mut note: Option<String> = None;

        for author in &article.authors {
            if !author.eq_last(target) {
                continue;
            }
            let first_match = author.eq_first(target);
            let middle_match = author.eq_middle_initial(target);

            if (first_match || middle_match) && self.pool_size < self.first_tier {
                note = Some(format!(
                    "name match trusted: pool size {} below {} (pmid={}, gold={})",
                    self.pool_size,
                    self.first_tier,
                    article.pmid,
                    article.gold.as_flag()
                ));
                break;
            }
            if first_match && middle_match && self.pool_size < self.second_tier {
                note = Some(format!(
                    "full name match trusted: pool size {} below {} (pmid={}, gold={})",
                    self.pool_size,
                    self.second_tier,
                    article.pmid,
                    article.gold.as_flag()
                ));
                break;
            }
        }

        match note {
            Some(note) => {
                article.annotate(note);
                Ok(1.0)
            }
            None => Ok(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byline_common::models::AuthorName;

    fn granstein() -> Identity {
        Identity {
            uid: "rgranste".to_string(),
            primary_name: AuthorName::new("Richard", "D", "Granstein"),
            ..Default::default()
        }
    }

    fn article_with_author(author: AuthorName) -> Article {
        let mut article = Article::new(100);
        article.authors = vec![author];
        article
    }

    fn score(pool_size: usize, article: &mut Article) -> f64 {
        let strategy = NameTierStrategy::new(pool_size, &ScoringParams::default());
        strategy.score_article(article, &granstein()).unwrap()
    }

    #[test]
    fn test_first_tier_fires_on_first_name_match_in_small_pool() {
        let mut article = article_with_author(AuthorName::new("Richard", "", "Granstein"));
        assert_eq!(score(150, &mut article), 1.0);
        assert_eq!(article.trail.len(), 1);
        assert!(article.trail[0].contains("below 200"));
    }

    #[test]
    fn test_abbreviated_first_name_fails_both_tiers_in_mid_pool() {
        // First name "R" is not an exact match for "Richard"; the matching
        // middle initial alone cannot carry the second tier
        let mut article = article_with_author(AuthorName::new("R", "D", "Granstein"));
        assert_eq!(score(450, &mut article), 0.0);
        assert!(article.trail.is_empty());
    }

    #[test]
    fn test_middle_initial_alone_fires_first_tier_only() {
        let mut article = article_with_author(AuthorName::new("R", "D", "Granstein"));
        assert_eq!(score(150, &mut article), 1.0);
    }

    #[test]
    fn test_second_tier_requires_both_parts() {
        let mut full = article_with_author(AuthorName::new("Richard", "David", "Granstein"));
        assert_eq!(score(450, &mut full), 1.0);
        let mut first_only = article_with_author(AuthorName::new("Richard", "", "Granstein"));
        assert_eq!(score(450, &mut first_only), 0.0);
    }

    #[test]
    fn test_nothing_fires_at_or_beyond_second_tier() {
        let mut article = article_with_author(AuthorName::new("Richard", "D", "Granstein"));
        assert_eq!(score(500, &mut article), 0.0);
        assert_eq!(score(5000, &mut article), 0.0);
    }

    #[test]
    fn test_different_last_name_never_fires() {
        let mut article = article_with_author(AuthorName::new("Richard", "D", "Grant"));
        assert_eq!(score(10, &mut article), 0.0);
    }

    #[test]
    fn test_shrinking_pool_is_monotone() {
        // Fixed name facts: first name matches, no middle initial
        let mut fired_above = false;
        for pool_size in [600, 499, 250, 199, 50, 1] {
            let mut article = article_with_author(AuthorName::new("Richard", "", "Granstein"));
            let fired = score(pool_size, &mut article) == 1.0;
            // Once firing starts as the pool shrinks it never stops
            assert!(!fired_above || fired);
            fired_above = fired;
        }
        assert!(fired_above);
    }

    #[test]
    fn test_empty_author_list_is_no_evidence() {
        let mut article = Article::new(100);
        assert_eq!(score(10, &mut article), 0.0);
    }
}
