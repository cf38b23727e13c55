//! Candidate article records

use serde::{Deserialize, Serialize};

use crate::models::name::AuthorName;

/// Gold-standard label on a candidate article
///
/// Assigned exactly once per run, before clustering, by the gold-standard
/// labeler; `Unset` only ever appears on articles that have not entered a
/// run yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoldLabel {
    #[default]
    Unset,
    /// Known not to belong to the target
    Negative,
    /// Curated as belonging to the target
    Positive,
}

impl GoldLabel {
    pub fn is_positive(&self) -> bool {
        matches!(self, GoldLabel::Positive)
    }

    /// 0/1 flag for feature export; `Unset` exports as 0
    pub fn as_flag(&self) -> i32 {
        match self {
            GoldLabel::Positive => 1,
            _ => 0,
        }
    }
}

/// One controlled-vocabulary subject heading on an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshHeading {
    pub descriptor: String,
    /// Flagged as a central topic of the article
    pub major: bool,
}

impl MeshHeading {
    pub fn new(descriptor: impl Into<String>, major: bool) -> Self {
        Self {
            descriptor: descriptor.into(),
            major,
        }
    }
}

/// Candidate-pool-size evidence attached to an article once per run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoolEvidence {
    /// Unique identifiers retrieved for the target, gold-seeded paths excluded
    pub retrieved_count: usize,
    /// −(count − threshold) / weight; larger pools score lower
    pub score: f64,
}

/// One candidate publication record
///
/// Produced by an external ingestion collaborator that merges heterogeneous
/// source feeds by pmid; fields absent from a source are simply empty. The
/// engine mutates only the gold label, the diagnostic trail, and the attached
/// pool evidence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Article {
    /// Numeric publication identifier
    pub pmid: u64,

    /// Ordered co-author list as printed on the record
    pub authors: Vec<AuthorName>,

    /// Subject headings, each flagged major/minor
    pub mesh_headings: Vec<MeshHeading>,

    /// Journal title, when the source supplied one
    pub journal_title: Option<String>,

    /// Affiliation strings from the primary feed
    pub affiliations: Vec<String>,

    /// Affiliation strings from the secondary citation-index feed
    pub index_affiliations: Vec<String>,

    /// Email addresses harvested from the record
    pub emails: Vec<String>,

    /// Gold-standard label, written once by the labeler
    pub gold: GoldLabel,

    /// Free-text diagnostic notes appended by evidence strategies
    pub trail: Vec<String>,

    /// Pool-size evidence, attached when a search record is available
    pub pool_evidence: Option<PoolEvidence>,
}

impl Article {
    pub fn new(pmid: u64) -> Self {
        Self {
            pmid,
            ..Default::default()
        }
    }

    /// Append a note to the diagnostic trail
    pub fn annotate(&mut self, note: impl Into<String>) {
        self.trail.push(note.into());
    }

    /// Descriptors flagged as major topics
    pub fn major_descriptors(&self) -> impl Iterator<Item = &str> {
        self.mesh_headings
            .iter()
            .filter(|h| h.major)
            .map(|h| h.descriptor.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gold_label_flag() {
        assert_eq!(GoldLabel::Unset.as_flag(), 0);
        assert_eq!(GoldLabel::Negative.as_flag(), 0);
        assert_eq!(GoldLabel::Positive.as_flag(), 1);
        assert!(GoldLabel::Positive.is_positive());
        assert!(!GoldLabel::Unset.is_positive());
    }

    #[test]
    fn test_major_descriptors_filters_minor() {
        let mut article = Article::new(100);
        article.mesh_headings = vec![
            MeshHeading::new("Dermatology", true),
            MeshHeading::new("Humans", false),
            MeshHeading::new("Langerhans Cells", true),
        ];
        let majors: Vec<&str> = article.major_descriptors().collect();
        assert_eq!(majors, vec!["Dermatology", "Langerhans Cells"]);
    }

    #[test]
    fn test_trail_accumulates_in_order() {
        let mut article = Article::new(100);
        article.annotate("first note");
        article.annotate("second note");
        assert_eq!(article.trail, vec!["first note", "second note"]);
    }
}
