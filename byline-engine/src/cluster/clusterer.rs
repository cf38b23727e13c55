//! The partitioning algorithm
//!
//! # Algorithm
//!
//! Articles are processed in input order. Each article either joins the
//! existing cluster it is most similar to or founds a new one. Similarity
//! between an article and a cluster:
//!
//! 1. Name-variant consistency gate: every article carries a target entry,
//!    the first co-author whose last name matches one of the identity's
//!    names. If the candidate's target entry conflicts with any member's
//!    (different full first names, or different non-empty middle initials),
//!    similarity is 0 regardless of co-authors — "Richard Granstein" and
//!    "Robert Granstein" are different people however many colleagues they
//!    share.
//! 2. Co-author overlap: the maximum, over members, of the number of shared
//!    non-target co-authors (matched on last name plus first initial).
//!
//! An article joins the lowest-id cluster with the highest similarity at or
//! above the threshold. In seeded mode the known-true identifiers are
//! gathered into the first cluster before the loop runs; they are asserted
//! to be one person and are never split.
//!
//! The procedure is deterministic for a fixed input order and seed set, and
//! cluster ids come from a counter owned by the `Clusterer`, so repeated
//! runs over the same input reproduce the same partition.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use byline_common::models::{Article, AuthorName, Identity};
use byline_common::ScoringParams;

use crate::cluster::model::Cluster;

pub struct Clusterer {
    similarity_threshold: f64,
    next_id: u64,
}

impl Clusterer {
    pub fn new(params: &ScoringParams) -> Self {
        Self {
            similarity_threshold: params.cluster_similarity_threshold,
            next_id: 0,
        }
    }

    /// Partition with no prior assertions
    pub fn cluster(&mut self, identity: &Identity, articles: Vec<Article>) -> BTreeMap<u64, Cluster> {
        self.partition(identity, articles, &BTreeSet::new())
    }

    /// Partition with known-true identifiers seeding the first cluster
    pub fn cluster_seeded(
        &mut self,
        identity: &Identity,
        articles: Vec<Article>,
        seeds: &BTreeSet<u64>,
    ) -> BTreeMap<u64, Cluster> {
        self.partition(identity, articles, seeds)
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn partition(
        &mut self,
        identity: &Identity,
        articles: Vec<Article>,
        seeds: &BTreeSet<u64>,
    ) -> BTreeMap<u64, Cluster> {
        let total = articles.len();
        let mut clusters: BTreeMap<u64, Cluster> = BTreeMap::new();
        let mut remaining: Vec<Article> = Vec::with_capacity(total);

        // Seed articles are asserted to be one person; they form the first
        // cluster before similarity is consulted at all.
        if seeds.is_empty() {
            remaining = articles;
        } else {
            let mut seed_cluster: Option<Cluster> = None;
            for article in articles {
                if !seeds.contains(&article.pmid) {
                    remaining.push(article);
                    continue;
                }
                if seed_cluster.is_none() {
                    let id = self.take_id();
                    seed_cluster = Some(Cluster::new(id, article.pmid));
                }
                if let Some(cluster) = seed_cluster.as_mut() {
                    cluster.articles.push(article);
                }
            }
            if let Some(cluster) = seed_cluster {
                debug!(cluster = cluster.id, seeds = cluster.size(), "seed cluster formed");
                clusters.insert(cluster.id, cluster);
            }
        }

        for article in remaining {
            let target = self.best_cluster(&clusters, &article, identity);
            match target.and_then(|id| clusters.get_mut(&id)) {
                Some(cluster) => {
                    debug!(pmid = article.pmid, cluster = cluster.id, "joined cluster");
                    cluster.articles.push(article);
                }
                None => {
                    let id = self.take_id();
                    debug!(pmid = article.pmid, cluster = id, "founded cluster");
                    let mut cluster = Cluster::new(id, article.pmid);
                    cluster.articles.push(article);
                    clusters.insert(id, cluster);
                }
            }
        }

        info!(
            articles = total,
            clusters = clusters.len(),
            seeded = !seeds.is_empty(),
            "candidate pool partitioned"
        );
        clusters
    }

    /// Lowest-id cluster with maximal similarity at or above the threshold
    fn best_cluster(
        &self,
        clusters: &BTreeMap<u64, Cluster>,
        article: &Article,
        identity: &Identity,
    ) -> Option<u64> {
        let mut best: Option<(u64, f64)> = None;
        for (id, cluster) in clusters {
            let similarity = self.similarity(cluster, article, identity);
            if similarity < self.similarity_threshold {
                continue;
            }
            match best {
                Some((_, score)) if similarity <= score => {}
                _ => best = Some((*id, similarity)),
            }
        }
        best.map(|(id, _)| id)
    }

    fn similarity(&self, cluster: &Cluster, article: &Article, identity: &Identity) -> f64 {
        if let Some(entry) = target_entry(article, identity) {
            for member in &cluster.articles {
                if let Some(member_entry) = target_entry(member, identity) {
                    if entry.conflicting_first(member_entry)
                        || entry.conflicting_middle_initial(member_entry)
                    {
                        return 0.0;
                    }
                }
            }
        }

        cluster
            .articles
            .iter()
            .map(|member| shared_coauthors(article, member, identity))
            .max()
            .unwrap_or(0) as f64
    }
}

/// The co-author entry that made this article a candidate: the first author
/// whose last name matches one of the identity's names
fn target_entry<'a>(article: &'a Article, identity: &Identity) -> Option<&'a AuthorName> {
    article
        .authors
        .iter()
        .find(|author| identity.names().any(|name| author.eq_last(name)))
}

/// Authors of `a` also present on `b`, excluding entries carrying the target
/// surname — the searched-for name itself proves nothing about shared
/// colleagues
fn shared_coauthors(a: &Article, b: &Article, identity: &Identity) -> usize {
    a.authors
        .iter()
        .filter(|author| !identity.names().any(|name| author.eq_last(name)))
        .filter(|author| {
            b.authors.iter().any(|other| {
                author.eq_last(other)
                    && match (author.first_initial(), other.first_initial()) {
                        (Some(x), Some(y)) => x == y,
                        _ => true,
                    }
            })
        })
        .count()
}
