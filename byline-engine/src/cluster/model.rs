//! Cluster of candidate articles

use serde::{Deserialize, Serialize};

use byline_common::models::Article;

/// One group of candidate articles attributed to the same (unknown) person
///
/// Clusters own their member articles: the Phase 1 partition moves every
/// article of the pool into exactly one cluster. The originator is the seed
/// or first-inserted article, kept for traceability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    /// Run-local identifier, assigned sequentially during partitioning
    pub id: u64,

    /// pmid of the article that established this cluster
    pub originator: u64,

    /// Member articles, in assignment order
    pub articles: Vec<Article>,
}

impl Cluster {
    pub fn new(id: u64, originator: u64) -> Self {
        Self {
            id,
            originator,
            articles: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.articles.len()
    }

    pub fn pmids(&self) -> impl Iterator<Item = u64> + '_ {
        self.articles.iter().map(|a| a.pmid)
    }

    pub fn contains_pmid(&self, pmid: u64) -> bool {
        self.articles.iter().any(|a| a.pmid == pmid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_accessors() {
        let mut cluster = Cluster::new(3, 101);
        cluster.articles.push(Article::new(101));
        cluster.articles.push(Article::new(205));
        assert_eq!(cluster.size(), 2);
        assert!(cluster.contains_pmid(205));
        assert!(!cluster.contains_pmid(999));
        assert_eq!(cluster.pmids().collect::<Vec<_>>(), vec![101, 205]);
    }
}
