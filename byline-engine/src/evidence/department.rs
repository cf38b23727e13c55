//! Department matching
//!
//! Fires when one of the identity's department names appears inside any
//! affiliation line of the record. Plain containment also covers the common
//! "Department of X" phrasing.

use byline_common::models::{Article, Identity};

use crate::error::EngineResult;
use crate::evidence::contains_ignore_case;
use crate::feature::Feature;
use crate::types::EvidenceStrategy;

pub struct DepartmentStrategy;

impl DepartmentStrategy {
    fn matched_department<'a>(&self, article: &Article, identity: &'a Identity) -> Option<&'a str> {
        identity.departments.iter().map(String::as_str).find(|dept| {
            article
                .affiliations
                .iter()
                .any(|line| contains_ignore_case(line, dept))
        })
    }
}

impl EvidenceStrategy for DepartmentStrategy {
    fn name(&self) -> &'static str {
        "department"
    }

    fn score_article(&self, article: &mut Article, identity: &Identity) -> EngineResult<f64> {
        match self.matched_department(article, identity) {
            Some(dept) => {
                let note = format!("department match: {}", dept);
                article.annotate(note);
                Ok(1.0)
            }
            None => Ok(0.0),
        }
    }

    fn populate_feature(&self, article: &Article, identity: &Identity, feature: &mut Feature) {
        if self.matched_department(article, identity).is_some() {
            feature.department_match = 1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            departments: vec!["Dermatology".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_department_of_phrasing_matches() {
        let mut article = Article::new(1);
        article.affiliations =
            vec!["Department of Dermatology, Example Medical College, New York".to_string()];
        let score = DepartmentStrategy
            .score_article(&mut article, &identity())
            .unwrap();
        assert_eq!(score, 1.0);
        assert!(article.trail[0].contains("Dermatology"));
    }

    #[test]
    fn test_unrelated_affiliation_is_no_evidence() {
        let mut article = Article::new(1);
        article.affiliations = vec!["Division of Cardiology, Elsewhere".to_string()];
        let score = DepartmentStrategy
            .score_article(&mut article, &identity())
            .unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_empty_department_list_never_fires() {
        let mut article = Article::new(1);
        article.affiliations = vec!["Department of Dermatology".to_string()];
        let score = DepartmentStrategy
            .score_article(&mut article, &Identity::default())
            .unwrap();
        assert_eq!(score, 0.0);
    }
}
