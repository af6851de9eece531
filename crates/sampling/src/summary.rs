use std::fmt;

use apriori::ItemUniverse;

use crate::{guarantee::CheckOutcome, reconcile::Reconciliation};

/// Mean and population standard deviation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stats {
    pub mean: f64,
    pub std: f64,
}

impl Stats {
    pub fn of(values: &[usize]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let n = values.len() as f64;
        let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
        let var = values
            .iter()
            .map(|&v| (v as f64 - mean).powi(2))
            .sum::<f64>()
            / n;
        Self {
            mean,
            std: var.sqrt(),
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.mean, self.std)
    }
}

/// The outcome of one sampling trial.
#[derive(Debug, Clone)]
pub struct TrialResult {
    pub candidates: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub outcome: CheckOutcome,
    pub reconciliation: Reconciliation,
}

#[derive(Debug, Clone)]
pub struct ExperimentSummary {
    pub theorem: &'static str,
    pub sample_size: usize,
    pub sample_threshold: f64,
    pub true_frequent: usize,
    pub trials: Vec<TrialResult>,
    pub false_positives: Stats,
    pub false_negatives: Stats,
}

impl ExperimentSummary {
    pub fn new(
        theorem: &'static str,
        sample_size: usize,
        sample_threshold: f64,
        true_frequent: usize,
        trials: Vec<TrialResult>,
    ) -> Self {
        let fp: Vec<_> = trials.iter().map(|t| t.false_positives).collect();
        let fn_: Vec<_> = trials.iter().map(|t| t.false_negatives).collect();
        Self {
            theorem,
            sample_size,
            sample_threshold,
            true_frequent,
            false_positives: Stats::of(&fp),
            false_negatives: Stats::of(&fn_),
            trials,
        }
    }
    /// Trials whose guarantee check failed.
    pub fn violations(&self) -> usize {
        self.trials.iter().filter(|t| t.outcome.is_err()).count()
    }
    /// Lists the candidates of the last trial by item name.
    pub fn itemsets<'a>(&'a self, universe: &'a ItemUniverse) -> CandidateListing<'a> {
        CandidateListing {
            summary: self,
            universe,
        }
    }
}

pub struct CandidateListing<'a> {
    summary: &'a ExperimentSummary,
    universe: &'a ItemUniverse,
}

impl fmt::Display for CandidateListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(last) = self.summary.trials.last() else {
            return Ok(());
        };
        write!(f, "{} itemsets of the last trial (full, sample):", self.summary.theorem)?;
        let r = &last.reconciliation;
        for (class, list) in [("frequent", &r.true_frequent), ("false positive", &r.false_positives)] {
            for s in list {
                write!(
                    f,
                    "\n{} {} {} {}",
                    s.itemset.display(self.universe),
                    s.full_support,
                    s.sample_support,
                    class
                )?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ExperimentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let column = |g: fn(&TrialResult) -> usize| -> Vec<usize> { self.trials.iter().map(g).collect() };
        writeln!(f, "Sample {} size: {}", self.theorem, self.sample_size)?;
        writeln!(f, "Support on sample: {}", self.sample_threshold)?;
        writeln!(f, "Nr of true frequent itemsets: {}", self.true_frequent)?;
        writeln!(f, "Nr of {} frequent itemsets: {:?}", self.theorem, column(|t| t.candidates))?;
        writeln!(f, "False negatives: {:?}", column(|t| t.false_negatives))?;
        writeln!(f, "False positives: {:?}", column(|t| t.false_positives))?;
        writeln!(f, "False negatives mean (standard dev): {}", self.false_negatives)?;
        writeln!(f, "False positives mean (standard dev): {}", self.false_positives)?;
        write!(f, "Guarantee violations: {}/{}", self.violations(), self.trials.len())
    }
}
