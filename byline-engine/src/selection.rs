//! Phase 2: cluster selection
//!
//! # Architecture
//!
//! Two passes over the Phase 1 partition:
//!
//! 1. **Primary selection** — every enabled evidence strategy scores every
//!    cluster's articles; a cluster whose summed evidence exceeds the
//!    decision threshold is selected. Phase 1 clusters are disjoint, so
//!    selections can never conflict.
//! 2. **Recovery** — clusters the primary pass rejected get one more chance:
//!    if the major descriptors of a rejected cluster overlap the topical
//!    profile of the confirmed selection strongly enough, the cluster is
//!    recovered. The pass only ever grows the selection, and rerunning it
//!    with the same profile changes nothing.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use byline_common::models::Identity;
use byline_common::ScoringParams;

use crate::cluster::Cluster;
use crate::evidence::{isolated_score, MeshMajorStrategy};
use crate::types::EvidenceStrategy;

pub struct ClusterSelector {
    strategies: Vec<Box<dyn EvidenceStrategy>>,
    selection_threshold: f64,
}

impl ClusterSelector {
    pub fn new(strategies: Vec<Box<dyn EvidenceStrategy>>, params: &ScoringParams) -> Self {
        Self {
            strategies,
            selection_threshold: params.cluster_selection_threshold,
        }
    }

    /// Primary pass: aggregate evidence per cluster, select above threshold
    ///
    /// Articles are mutated only through strategy trail annotation.
    pub fn select(
        &self,
        clusters: &mut BTreeMap<u64, Cluster>,
        identity: &Identity,
    ) -> BTreeSet<u64> {
        let mut selected = BTreeSet::new();
        for (id, cluster) in clusters.iter_mut() {
            let mut aggregate = 0.0;
            for strategy in &self.strategies {
                aggregate += isolated_score(strategy.as_ref(), &mut cluster.articles, identity);
            }
            debug!(cluster = id, score = aggregate, "cluster evidence aggregated");
            if aggregate > self.selection_threshold {
                selected.insert(*id);
            }
        }
        info!(
            selected = selected.len(),
            clusters = clusters.len(),
            "primary selection complete"
        );
        selected
    }

    /// Recovery pass: add rejected clusters whose topical overlap with the
    /// confirmed selection clears the strategy's threshold
    ///
    /// Monotone (only inserts into `selected`) and idempotent for a fixed
    /// profile.
    pub fn recover_unselected(
        &self,
        mesh: &MeshMajorStrategy,
        clusters: &BTreeMap<u64, Cluster>,
        selected: &mut BTreeSet<u64>,
    ) {
        let mut recovered = 0usize;
        for (id, cluster) in clusters {
            if selected.contains(id) {
                continue;
            }
            let overlap = mesh.cluster_overlap(cluster);
            if overlap > mesh.threshold() {
                info!(cluster = id, overlap, "cluster recovered via topical overlap");
                selected.insert(*id);
                recovered += 1;
            }
        }
        if recovered > 0 {
            info!(recovered, total = selected.len(), "recovery pass grew selection");
        }
    }
}
