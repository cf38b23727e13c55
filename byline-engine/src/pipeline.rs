//! Pipeline orchestration
//!
//! Wires the phases into the two entry points consumers call:
//!
//! - [`Pipeline::generate_features`] — gold labeling plus the fixed export
//!   battery, one feature record per article; no clustering
//! - [`Pipeline::run`] — the full disambiguation: gold labeling, pool-size
//!   evidence, Phase 1 partition, Phase 2 selection, topical recovery,
//!   evaluation, per-cluster topic aggregation
//!
//! A pipeline is constructed with the collaborators it needs (the search
//! record source and the scoring parameters) and is synchronous and
//! stateless across runs; callers may drive one pipeline per worker to
//! process many identities in parallel.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{info, warn};

use byline_common::models::{Article, Identity};
use byline_common::ScoringParams;

use crate::analysis::{assign_gold_standard, Analysis};
use crate::cluster::{Cluster, Clusterer};
use crate::error::{EngineError, EngineResult};
use crate::evidence::{self, isolated_score, DescriptorProfile, MeshMajorStrategy, PoolSizeStrategy};
use crate::feature::Feature;
use crate::selection::ClusterSelector;
use crate::types::SearchRecordSource;

/// One identity's unit of work, assembled by external ingestion
#[derive(Debug, Clone)]
pub struct RunInput {
    pub identity: Identity,
    pub articles: Vec<Article>,
    /// Curated known-true identifiers; duplicates are tolerated and ignored
    pub known_pmids: Vec<u64>,
}

/// Result of a full disambiguation run
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub analysis: Analysis,
    /// The complete Phase 1 partition, selected or not
    pub clusters: Vec<Cluster>,
    /// Major-descriptor frequency per selected cluster, for downstream
    /// reporting
    pub mesh_major_counts: BTreeMap<u64, BTreeMap<String, u64>>,
}

pub struct Pipeline {
    search_records: Box<dyn SearchRecordSource>,
    params: ScoringParams,
}

impl Pipeline {
    /// Rejects parameters outside their documented ranges
    pub fn new(
        search_records: Box<dyn SearchRecordSource>,
        params: ScoringParams,
    ) -> EngineResult<Self> {
        params.validate()?;
        Ok(Self {
            search_records,
            params,
        })
    }

    /// Produce one feature record per article for offline export
    ///
    /// Independent of clustering: the battery here is the fixed export set
    /// (email, department, known-relationship, affiliation,
    /// index-affiliation).
    pub fn generate_features(&self, input: RunInput) -> EngineResult<Vec<Feature>> {
        let RunInput {
            identity,
            mut articles,
            known_pmids,
        } = input;
        let known: BTreeSet<u64> = known_pmids.into_iter().collect();
        assign_gold_standard(&mut articles, &known);

        let battery = evidence::feature_battery();
        let mut features = Vec::with_capacity(articles.len());
        for article in &articles {
            let mut feature = Feature::new(article);
            for strategy in &battery {
                strategy.populate_feature(article, &identity, &mut feature);
            }
            features.push(feature);
        }
        info!(
            uid = %identity.uid,
            features = features.len(),
            "feature generation complete"
        );
        Ok(features)
    }

    /// Full disambiguation of one identity's candidate pool
    pub fn run(&self, input: RunInput) -> EngineResult<RunOutput> {
        let RunInput {
            identity,
            mut articles,
            known_pmids,
        } = input;

        // Clustering against an unnamed target is undefined; refuse before
        // any work happens
        if !identity.has_last_name() {
            return Err(EngineError::Config(format!(
                "identity {} has no last name",
                identity.uid
            )));
        }

        let known: BTreeSet<u64> = known_pmids.into_iter().collect();
        assign_gold_standard(&mut articles, &known);

        // One lookup per run; the strategy holds the record for the run's
        // lifetime. A failed lookup degrades to missing pool evidence.
        let record = match self.search_records.find_by_uid(&identity.uid) {
            Ok(record) => record,
            Err(e) => {
                warn!(
                    uid = %identity.uid,
                    error = %e,
                    "search record lookup failed, continuing without pool evidence"
                );
                None
            }
        };
        let pool_size = articles.len();
        let pool_strategy = PoolSizeStrategy::new(record, pool_size, &self.params);
        isolated_score(&pool_strategy, &mut articles, &identity);

        // Phase 1
        let mut clusterer = Clusterer::new(&self.params);
        let mut clusters = if known.is_empty() {
            clusterer.cluster(&identity, articles)
        } else {
            clusterer.cluster_seeded(&identity, articles, &known)
        };

        // Phase 2
        let selector = ClusterSelector::new(
            evidence::selection_battery(pool_size, &self.params),
            &self.params,
        );
        let mut selected = selector.select(&mut clusters, &identity);

        // Recovery over the rejected clusters, against the topical profile
        // of the primary selection
        let profile =
            DescriptorProfile::from_articles(selected_articles(&clusters, &selected)?);
        let mesh = MeshMajorStrategy::new(profile, self.params.mesh_overlap_threshold);
        selector.recover_unselected(&mesh, &clusters, &mut selected);

        let analysis = Analysis::evaluate(&clusters, &selected, &known)?;
        info!(
            uid = %identity.uid,
            precision = analysis.precision(),
            recall = analysis.recall(),
            accuracy = analysis.accuracy(),
            selected_clusters = selected.len(),
            "run evaluated"
        );

        let mesh_major_counts = selected_mesh_counts(&clusters, &selected)?;

        Ok(RunOutput {
            analysis,
            clusters: clusters.into_values().collect(),
            mesh_major_counts,
        })
    }
}

/// Resolve every selected id against the partition, fatal on a miss
fn selected_articles<'a>(
    clusters: &'a BTreeMap<u64, Cluster>,
    selected: &BTreeSet<u64>,
) -> EngineResult<Vec<&'a Article>> {
    let mut articles = Vec::new();
    for id in selected {
        let cluster = clusters.get(id).ok_or(EngineError::ClusterNotFound(*id))?;
        articles.extend(cluster.articles.iter());
    }
    Ok(articles)
}

/// Major-descriptor frequency table per selected cluster
fn selected_mesh_counts(
    clusters: &BTreeMap<u64, Cluster>,
    selected: &BTreeSet<u64>,
) -> EngineResult<BTreeMap<u64, BTreeMap<String, u64>>> {
    let mut per_cluster = BTreeMap::new();
    for id in selected {
        let cluster = clusters.get(id).ok_or(EngineError::ClusterNotFound(*id))?;
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for article in &cluster.articles {
            for descriptor in article.major_descriptors() {
                *counts.entry(descriptor.to_string()).or_insert(0) += 1;
            }
        }
        per_cluster.insert(*id, counts);
    }
    Ok(per_cluster)
}
