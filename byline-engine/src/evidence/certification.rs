//! Board-certification matching
//!
//! A specialist tends to publish inside their specialty: a certification
//! name appearing among an article's subject headings or in its journal
//! title is weak but cheap evidence.

use byline_common::models::{Article, Identity};

use crate::error::EngineResult;
use crate::evidence::contains_ignore_case;
use crate::types::EvidenceStrategy;

pub struct CertificationStrategy;

impl CertificationStrategy {
    fn matched_certification<'a>(&self, article: &Article, identity: &'a Identity) -> Option<&'a str> {
        identity
            .certifications
            .iter()
            .map(String::as_str)
            .find(|cert| {
                article
                    .mesh_headings
                    .iter()
                    .any(|heading| contains_ignore_case(&heading.descriptor, cert))
                    || article
                        .journal_title
                        .as_deref()
                        .is_some_and(|title| contains_ignore_case(title, cert))
            })
    }
}

impl EvidenceStrategy for CertificationStrategy {
    fn name(&self) -> &'static str {
        "certification"
    }

    fn score_article(&self, article: &mut Article, identity: &Identity) -> EngineResult<f64> {
        match self.matched_certification(article, identity) {
            Some(cert) => {
                let note = format!("certification match: {}", cert);
                article.annotate(note);
                Ok(1.0)
            }
            None => Ok(0.0),
        }
    }
}
