use apriori::{Itemset, PresenceTable};

use crate::{error::DomainError, support::support};

/// A sample-frequent itemset with its support measured on both tables.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredItemset {
    pub itemset: Itemset,
    pub full_support: f64,
    pub sample_support: f64,
}

impl ScoredItemset {
    pub fn error(&self) -> f64 {
        (self.full_support - self.sample_support).abs()
    }
}

/// The candidates of one trial, split by their support on the full table.
/// Every candidate lands in exactly one of the two lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reconciliation {
    pub true_frequent: Vec<ScoredItemset>,
    pub false_positives: Vec<ScoredItemset>,
}

impl Reconciliation {
    /// Measures every candidate against `full` and `sample` and partitions them:
    /// true-frequent iff its full support reaches `true_support`.
    pub fn new(
        full: &PresenceTable,
        sample: &PresenceTable,
        candidates: impl IntoIterator<Item = Itemset>,
        true_support: f64,
    ) -> Result<Self, DomainError> {
        let mut this = Self::default();
        for itemset in candidates {
            let full_support = support(full, &itemset)?;
            let sample_support = support(sample, &itemset)?;
            let scored = ScoredItemset {
                itemset,
                full_support,
                sample_support,
            };
            if full_support >= true_support {
                this.true_frequent.push(scored);
            } else {
                this.false_positives.push(scored);
            }
        }
        Ok(this)
    }
    pub fn len(&self) -> usize {
        self.true_frequent.len() + self.false_positives.len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// All candidates, true-frequent first.
    pub fn iter(&self) -> impl Iterator<Item = &ScoredItemset> {
        self.true_frequent.iter().chain(self.false_positives.iter())
    }
    /// `(full support, sample support)` of every candidate.
    pub fn pairs(&self) -> Vec<(f64, f64)> {
        self.iter()
            .map(|s| (s.full_support, s.sample_support))
            .collect()
    }
    /// True-frequent itemsets of the full table that the sample did not recover.
    /// `true_frequent_count` is mined once on the full table, before any trial.
    pub fn false_negatives(&self, true_frequent_count: usize) -> usize {
        true_frequent_count.saturating_sub(self.true_frequent.len())
    }
}
