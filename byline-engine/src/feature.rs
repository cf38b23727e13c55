//! Per-article feature records for offline export
//!
//! One record per candidate article, one named numeric field per export
//! strategy, plus the gold-standard flag. Consumers train or audit matching
//! models offline; the fields here never feed back into clustering.

use serde::{Deserialize, Serialize};

use byline_common::models::Article;

/// Named evidence fields for one article
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Numeric publication identifier
    pub pmid: u64,

    /// Gold-standard flag (1 = curated as the target's article)
    pub gold: i32,

    pub email_match: f64,
    pub department_match: f64,
    pub known_relationship: f64,
    pub affiliation_match: f64,
    pub index_affiliation_match: f64,
}

impl Feature {
    /// Start a record for an article; evidence fields default to zero until
    /// the export battery populates them
    pub fn new(article: &Article) -> Self {
        Self {
            pmid: article.pmid,
            gold: article.gold.as_flag(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byline_common::models::GoldLabel;

    #[test]
    fn test_new_carries_pmid_and_gold_flag() {
        let mut article = Article::new(12345);
        article.gold = GoldLabel::Positive;
        let feature = Feature::new(&article);
        assert_eq!(feature.pmid, 12345);
        assert_eq!(feature.gold, 1);
        assert_eq!(feature.email_match, 0.0);
    }

    #[test]
    fn test_export_shape() {
        let feature = Feature {
            pmid: 7,
            gold: 1,
            email_match: 1.0,
            ..Default::default()
        };
        let json = serde_json::to_value(&feature).unwrap();
        assert_eq!(json["pmid"], 7);
        assert_eq!(json["gold"], 1);
        assert_eq!(json["email_match"], 1.0);
        assert_eq!(json["index_affiliation_match"], 0.0);
    }
}
