//! Known-relationship matching
//!
//! A co-author list overlapping the identity's known collaborators (past
//! co-authors, grant co-investigators, mentors) is strong evidence the
//! record belongs to the target. Names match on last name plus first
//! initial; collaborator lists rarely carry more.

use byline_common::models::{Article, AuthorName, Identity};

use crate::error::EngineResult;
use crate::feature::Feature;
use crate::types::EvidenceStrategy;

pub struct RelationshipStrategy;

impl RelationshipStrategy {
    fn matched_collaborator<'a>(
        &self,
        article: &Article,
        identity: &'a Identity,
    ) -> Option<&'a AuthorName> {
        identity.known_relationships.iter().find(|known| {
            article
                .authors
                .iter()
                .any(|author| author.eq_last(known) && author.eq_first_initial(known))
        })
    }
}

impl EvidenceStrategy for RelationshipStrategy {
    fn name(&self) -> &'static str {
        "known-relationship"
    }

    fn score_article(&self, article: &mut Article, identity: &Identity) -> EngineResult<f64> {
        match self.matched_collaborator(article, identity) {
            Some(known) => {
                let note = format!("known collaborator on byline: {}", known);
                article.annotate(note);
                Ok(1.0)
            }
            None => Ok(0.0),
        }
    }

    fn populate_feature(&self, article: &Article, identity: &Identity, feature: &mut Feature) {
        if self.matched_collaborator(article, identity).is_some() {
            feature.known_relationship = 1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            known_relationships: vec![
                AuthorName::new("Wanhong", "", "Ding"),
                AuthorName::new("John", "A", "Wagner"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_collaborator_overlap_fires() {
        let mut article = Article::new(1);
        article.authors = vec![
            AuthorName::new("R", "D", "Granstein"),
            AuthorName::new("W", "", "Ding"),
        ];
        let score = RelationshipStrategy
            .score_article(&mut article, &identity())
            .unwrap();
        assert_eq!(score, 1.0);
        assert!(article.trail[0].contains("Ding"));
    }

    #[test]
    fn test_last_name_alone_is_not_enough() {
        let mut article = Article::new(1);
        article.authors = vec![AuthorName::new("Xiao", "", "Ding")];
        let score = RelationshipStrategy
            .score_article(&mut article, &identity())
            .unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_empty_coauthor_list_is_no_evidence() {
        let mut article = Article::new(1);
        let score = RelationshipStrategy
            .score_article(&mut article, &identity())
            .unwrap();
        assert_eq!(score, 0.0);
    }
}
