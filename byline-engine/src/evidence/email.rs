//! Email matching
//!
//! The strongest single signal: a known address of the target appearing on
//! the record. Sources print addresses inconsistently — sometimes as a
//! harvested email field, sometimes buried in an affiliation line — so both
//! are searched.

use byline_common::models::{Article, Identity};

use crate::error::EngineResult;
use crate::evidence::contains_ignore_case;
use crate::feature::Feature;
use crate::types::EvidenceStrategy;

pub struct EmailStrategy;

impl EmailStrategy {
    fn matched_email<'a>(&self, article: &Article, identity: &'a Identity) -> Option<&'a str> {
        identity
            .emails
            .iter()
            .map(String::as_str)
            .find(|email| {
                article
                    .emails
                    .iter()
                    .any(|candidate| candidate.eq_ignore_ascii_case(email))
                    || article
                        .affiliations
                        .iter()
                        .any(|line| contains_ignore_case(line, email))
            })
    }
}

impl EvidenceStrategy for EmailStrategy {
    fn name(&self) -> &'static str {
        "email"
    }

    fn score_article(&self, article: &mut Article, identity: &Identity) -> EngineResult<f64> {
        match self.matched_email(article, identity) {
            Some(email) => {
                let note = format!("email match: {}", email);
                article.annotate(note);
                Ok(1.0)
            }
            None => Ok(0.0),
        }
    }

    fn populate_feature(&self, article: &Article, identity: &Identity, feature: &mut Feature) {
        if self.matched_email(article, identity).is_some() {
            feature.email_match = 1.0;
        }
    }
}
