//! Topical-overlap ("MeSH major") matching
//!
//! An author's confirmed articles define a topical fingerprint: the major
//! subject descriptors they publish under and how often. Clusters that
//! gathered no direct evidence (no email, no affiliation, sparse names) can
//! still be recovered when their articles' major descriptors overlap that
//! fingerprint.
//!
//! The profile is built from the primary selection and passed in explicitly;
//! this strategy must therefore run after the primary selection pass, never
//! inside it.

use std::collections::{BTreeMap, BTreeSet};

use byline_common::models::{Article, Identity};

use crate::cluster::Cluster;
use crate::error::EngineResult;
use crate::types::EvidenceStrategy;

/// Frequency map of major descriptors over a confirmed article set
///
/// Keys are lowercased for matching; the raw-cased per-cluster counts
/// reported to consumers are aggregated separately by the pipeline.
#[derive(Debug, Clone, Default)]
pub struct DescriptorProfile {
    counts: BTreeMap<String, u64>,
}

impl DescriptorProfile {
    /// Harvest major descriptors from an already-confirmed article set
    pub fn from_articles<'a>(articles: impl IntoIterator<Item = &'a Article>) -> Self {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for article in articles {
            for descriptor in article.major_descriptors() {
                *counts.entry(descriptor.to_lowercase()).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    pub fn contains(&self, descriptor: &str) -> bool {
        self.counts.contains_key(&descriptor.to_lowercase())
    }

    /// Occurrences of a descriptor across the confirmed set
    pub fn count(&self, descriptor: &str) -> u64 {
        self.counts.get(&descriptor.to_lowercase()).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }
}

/// Overlap between article topics and the confirmed-selection profile
pub struct MeshMajorStrategy {
    profile: DescriptorProfile,
    threshold: f64,
}

impl MeshMajorStrategy {
    pub fn new(profile: DescriptorProfile, threshold: f64) -> Self {
        Self { profile, threshold }
    }

    /// Overlap a cluster must exceed to be recovered
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    fn overlap_of(&self, descriptors: &BTreeSet<String>) -> f64 {
        if descriptors.is_empty() || self.profile.is_empty() {
            return 0.0;
        }
        let matched = descriptors
            .iter()
            .filter(|d| self.profile.contains(d))
            .count();
        matched as f64 / descriptors.len() as f64
    }

    /// Fraction of the cluster's distinct major descriptors found in the
    /// profile
    pub fn cluster_overlap(&self, cluster: &Cluster) -> f64 {
        let descriptors: BTreeSet<String> = cluster
            .articles
            .iter()
            .flat_map(|a| a.major_descriptors())
            .map(|d| d.to_lowercase())
            .collect();
        self.overlap_of(&descriptors)
    }
}

impl EvidenceStrategy for MeshMajorStrategy {
    fn name(&self) -> &'static str {
        "mesh-major"
    }

    fn score_article(&self, article: &mut Article, _identity: &Identity) -> EngineResult<f64> {
        let descriptors: BTreeSet<String> = article
            .major_descriptors()
            .map(|d| d.to_lowercase())
            .collect();
        let overlap = self.overlap_of(&descriptors);
        if overlap > self.threshold {
            let note = format!("topical overlap with confirmed selection: {:.2}", overlap);
            article.annotate(note);
        }
        Ok(overlap)
    }
}
