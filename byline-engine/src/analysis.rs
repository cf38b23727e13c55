//! Evaluation against the gold standard
//!
//! Compares the selected article set to the curated known-true list,
//! producing a confusion matrix over pmids, per-journal breakdowns for each
//! category, one diagnostic record per article, and derived
//! precision/recall/accuracy.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use byline_common::models::{Article, GoldLabel};

use crate::cluster::Cluster;
use crate::error::{EngineError, EngineResult};

/// Label every article by membership in the known-true set
///
/// The sole writer of the gold-standard field. Idempotent: relabeling with
/// the same known set reproduces the same labels.
pub fn assign_gold_standard(articles: &mut [Article], known: &BTreeSet<u64>) {
    for article in articles.iter_mut() {
        article.gold = if known.contains(&article.pmid) {
            GoldLabel::Positive
        } else {
            GoldLabel::Negative
        };
    }
    debug!(
        articles = articles.len(),
        known = known.len(),
        "gold standard assigned"
    );
}

/// Classification of one article against (selected, gold) membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    TruePositive,
    FalsePositive,
    FalseNegative,
    TrueNegative,
}

impl Outcome {
    fn classify(selected: bool, gold: bool) -> Self {
        match (selected, gold) {
            (true, true) => Outcome::TruePositive,
            (true, false) => Outcome::FalsePositive,
            (false, true) => Outcome::FalseNegative,
            (false, false) => Outcome::TrueNegative,
        }
    }
}

/// Per-article evaluation record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDiagnostic {
    pub pmid: u64,
    pub outcome: Outcome,
    pub cluster_id: u64,
    pub cluster_size: usize,
    pub is_originator: bool,
    pub selected: bool,
}

/// Evaluation result for one run
#[derive(Debug, Clone, Default, Serialize)]
pub struct Analysis {
    pub true_positives: Vec<u64>,
    pub false_positives: Vec<u64>,
    pub false_negatives: Vec<u64>,
    pub true_negatives: Vec<u64>,

    /// Size of the deduplicated known-true list
    pub gold_standard_size: usize,

    /// Total articles across the selected clusters
    pub selected_size: usize,

    pub tp_journal_counts: BTreeMap<String, u64>,
    pub fp_journal_counts: BTreeMap<String, u64>,
    pub fn_journal_counts: BTreeMap<String, u64>,
    pub tn_journal_counts: BTreeMap<String, u64>,

    pub diagnostics: Vec<ArticleDiagnostic>,
}

impl Analysis {
    /// Full evaluation: classify every article of every cluster
    ///
    /// Fails with [`EngineError::ClusterNotFound`] when a selected id is
    /// missing from the partition; that invariant break means the run
    /// cannot be trusted.
    pub fn evaluate(
        clusters: &BTreeMap<u64, Cluster>,
        selected: &BTreeSet<u64>,
        gold: &BTreeSet<u64>,
    ) -> EngineResult<Analysis> {
        let mut selected_pmids: BTreeSet<u64> = BTreeSet::new();
        let mut selected_size = 0usize;
        for id in selected {
            let cluster = clusters.get(id).ok_or(EngineError::ClusterNotFound(*id))?;
            selected_size += cluster.size();
            selected_pmids.extend(cluster.pmids());
        }

        let mut analysis = Analysis {
            gold_standard_size: gold.len(),
            selected_size,
            ..Default::default()
        };

        for (id, cluster) in clusters {
            for article in &cluster.articles {
                let is_selected = selected_pmids.contains(&article.pmid);
                let outcome = Outcome::classify(is_selected, gold.contains(&article.pmid));
                analysis.record(outcome, article);
                analysis.diagnostics.push(ArticleDiagnostic {
                    pmid: article.pmid,
                    outcome,
                    cluster_id: *id,
                    cluster_size: cluster.size(),
                    is_originator: article.pmid == cluster.originator,
                    selected: is_selected,
                });
            }
        }
        Ok(analysis)
    }

    /// Legacy diagnostic form: treat one cluster as the entire selection
    ///
    /// Counts true and false positives only; articles outside the chosen
    /// cluster are not classified.
    pub fn evaluate_single_cluster(
        clusters: &BTreeMap<u64, Cluster>,
        cluster_id: u64,
        gold: &BTreeSet<u64>,
    ) -> EngineResult<Analysis> {
        let cluster = clusters
            .get(&cluster_id)
            .ok_or(EngineError::ClusterNotFound(cluster_id))?;

        let mut analysis = Analysis {
            gold_standard_size: gold.len(),
            selected_size: cluster.size(),
            ..Default::default()
        };
        for article in &cluster.articles {
            if gold.contains(&article.pmid) {
                analysis.true_positives.push(article.pmid);
            } else {
                analysis.false_positives.push(article.pmid);
            }
        }
        Ok(analysis)
    }

    fn record(&mut self, outcome: Outcome, article: &Article) {
        let (pmids, journals) = match outcome {
            Outcome::TruePositive => (&mut self.true_positives, &mut self.tp_journal_counts),
            Outcome::FalsePositive => (&mut self.false_positives, &mut self.fp_journal_counts),
            Outcome::FalseNegative => (&mut self.false_negatives, &mut self.fn_journal_counts),
            Outcome::TrueNegative => (&mut self.true_negatives, &mut self.tn_journal_counts),
        };
        pmids.push(article.pmid);
        if let Some(journal) = &article.journal_title {
            *journals.entry(journal.clone()).or_insert(0) += 1;
        }
    }

    /// TP / selected-set size; 0 when nothing was selected
    pub fn precision(&self) -> f64 {
        if self.selected_size == 0 {
            0.0
        } else {
            self.true_positives.len() as f64 / self.selected_size as f64
        }
    }

    /// TP / gold-standard size; 0 when no gold standard exists
    pub fn recall(&self) -> f64 {
        if self.gold_standard_size == 0 {
            0.0
        } else {
            self.true_positives.len() as f64 / self.gold_standard_size as f64
        }
    }

    /// Mean of precision and recall
    pub fn accuracy(&self) -> f64 {
        (self.precision() + self.recall()) / 2.0
    }

    /// Articles classified across all four categories
    pub fn classified_total(&self) -> usize {
        self.true_positives.len()
            + self.false_positives.len()
            + self.false_negatives.len()
            + self.true_negatives.len()
    }
}
