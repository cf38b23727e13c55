//! Institutional affiliation matching
//!
//! Two strategies with the same containment test against different source
//! feeds: the primary record's affiliation lines and the secondary citation
//! index's. The feeds disagree often enough that each signal earns its own
//! feature field.

use byline_common::models::{Article, Identity};

use crate::error::EngineResult;
use crate::evidence::contains_ignore_case;
use crate::feature::Feature;
use crate::types::EvidenceStrategy;

fn matched_institution<'a>(lines: &[String], identity: &'a Identity) -> Option<&'a str> {
    identity
        .institutions
        .iter()
        .map(String::as_str)
        .find(|institution| lines.iter().any(|line| contains_ignore_case(line, institution)))
}

/// Affiliation match against the primary feed
pub struct AffiliationStrategy;

impl EvidenceStrategy for AffiliationStrategy {
    fn name(&self) -> &'static str {
        "affiliation"
    }

    fn score_article(&self, article: &mut Article, identity: &Identity) -> EngineResult<f64> {
        match matched_institution(&article.affiliations, identity) {
            Some(institution) => {
                let note = format!("affiliation match: {}", institution);
                article.annotate(note);
                Ok(1.0)
            }
            None => Ok(0.0),
        }
    }

    fn populate_feature(&self, article: &Article, identity: &Identity, feature: &mut Feature) {
        if matched_institution(&article.affiliations, identity).is_some() {
            feature.affiliation_match = 1.0;
        }
    }
}

/// Affiliation match against the secondary citation-index feed
pub struct IndexAffiliationStrategy;

impl EvidenceStrategy for IndexAffiliationStrategy {
    fn name(&self) -> &'static str {
        "index-affiliation"
    }

    fn score_article(&self, article: &mut Article, identity: &Identity) -> EngineResult<f64> {
        match matched_institution(&article.index_affiliations, identity) {
            Some(institution) => {
                let note = format!("index affiliation match: {}", institution);
                article.annotate(note);
                Ok(1.0)
            }
            None => Ok(0.0),
        }
    }

    fn populate_feature(&self, article: &Article, identity: &Identity, feature: &mut Feature) {
        if matched_institution(&article.index_affiliations, identity).is_some() {
            feature.index_affiliation_match = 1.0;
        }
    }
}
