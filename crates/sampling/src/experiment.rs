use apriori::{ItemUniverse, ItemsetMiner, PresenceTable, TransactionSet, table::encode};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, warn};

use crate::{
    config::ExperimentConfig,
    d_bound::d_bound,
    error::{DomainError, ExperimentError},
    reconcile::Reconciliation,
    sampler::draw,
    summary::{ExperimentSummary, TrialResult},
    theorem::{DatasetParams, Theorem},
};

/// The full dataset: the source of truth for every "true" statistic.
/// Never mutated once built; trials only read it.
#[derive(Debug)]
pub struct Population {
    universe: ItemUniverse,
    table: PresenceTable,
    d_bound: Result<usize, DomainError>,
}

impl Population {
    pub fn new(data: TransactionSet) -> Result<Self, DomainError> {
        let (table, dataset_size, total_items) = encode(&data);
        if dataset_size == 0 {
            return Err(DomainError::EmptyTable);
        }
        info!(dataset_size, total_items, "population encoded");
        Ok(Self {
            d_bound: d_bound(&data.transactions),
            universe: data.universe,
            table,
        })
    }
    /// A population over an already encoded table; items have no names.
    pub fn from_table(table: PresenceTable) -> Result<Self, DomainError> {
        if table.is_empty() {
            return Err(DomainError::EmptyTable);
        }
        let transactions: Vec<Vec<usize>> = (0..table.rows()).map(|r| table.present(r)).collect();
        Ok(Self {
            d_bound: d_bound(&transactions),
            universe: ItemUniverse::default(),
            table,
        })
    }
    pub fn table(&self) -> &PresenceTable {
        &self.table
    }
    pub fn universe(&self) -> &ItemUniverse {
        &self.universe
    }
}

impl DatasetParams for Population {
    fn dataset_size(&self) -> usize {
        self.table.rows()
    }
    fn total_items(&self) -> usize {
        self.table.columns()
    }
    fn d_bound(&self) -> Result<usize, DomainError> {
        self.d_bound.clone()
    }
}

/// Repeated sampling trials of one or more theorems against a population.
pub struct Experiment<'a, M: ItemsetMiner> {
    population: &'a Population,
    miner: M,
    config: ExperimentConfig,
    true_frequent: usize,
    rng: StdRng,
}

impl<'a, M: ItemsetMiner> Experiment<'a, M> {
    /// Validates the configuration and mines the population once for its
    /// true-frequent itemset count, held fixed across every trial.
    pub fn new(
        population: &'a Population,
        miner: M,
        config: ExperimentConfig,
    ) -> Result<Self, ExperimentError> {
        config.validate()?;
        let true_frequent = miner.mine(population.table(), config.true_support).len();
        info!(
            true_support = config.true_support,
            true_frequent, "population mined"
        );
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            population,
            miner,
            config,
            true_frequent,
            rng,
        })
    }
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }
    pub fn true_frequent(&self) -> usize {
        self.true_frequent
    }

    /// Runs `config.trials` independent trials of `theorem`.
    /// Guarantee violations are recorded in the summary; only invalid
    /// parameters and domain errors abort.
    pub fn run(&mut self, theorem: &impl Theorem) -> Result<ExperimentSummary, ExperimentError> {
        theorem.validate()?;
        let sample_size = theorem.sample_size(&self.config, self.population)?;
        if sample_size == 0 {
            return Err(DomainError::EmptySample.into());
        }
        let threshold = theorem.sample_threshold(&self.config, sample_size);
        // Mining at a support of zero or less would return every itemset
        if threshold.is_nan() || threshold <= 0.0 {
            return Err(DomainError::NonPositiveThreshold { threshold }.into());
        }
        info!(
            theorem = theorem.name(),
            sample_size,
            sample_threshold = threshold,
            trials = self.config.trials,
            "experiment started"
        );
        let mut trials = Vec::with_capacity(self.config.trials);
        for i in 0..self.config.trials {
            trials.push(self.trial(theorem, sample_size, threshold, i)?);
        }
        let summary = ExperimentSummary::new(
            theorem.name(),
            sample_size,
            threshold,
            self.true_frequent,
            trials,
        );
        info!(
            theorem = theorem.name(),
            fp_mean = summary.false_positives.mean,
            fp_std = summary.false_positives.std,
            fn_mean = summary.false_negatives.mean,
            fn_std = summary.false_negatives.std,
            violations = summary.violations(),
            "experiment finished"
        );
        Ok(summary)
    }

    fn trial(
        &mut self,
        theorem: &impl Theorem,
        sample_size: usize,
        threshold: f64,
        trial: usize,
    ) -> Result<TrialResult, DomainError> {
        let full = self.population.table();
        let sample = draw(full, sample_size, theorem.replacement(), &mut self.rng);
        let candidates = self.miner.mine(&sample, threshold);
        let reconciliation =
            Reconciliation::new(full, &sample, candidates, self.config.true_support)?;
        let outcome = theorem.check(&self.config, threshold, &reconciliation.pairs());
        if let Err(violation) = &outcome {
            warn!(theorem = theorem.name(), trial, %violation, "guarantee violated");
        }
        let result = TrialResult {
            candidates: reconciliation.len(),
            false_positives: reconciliation.false_positives.len(),
            false_negatives: reconciliation.false_negatives(self.true_frequent),
            outcome,
            reconciliation,
        };
        debug!(
            theorem = theorem.name(),
            trial,
            candidates = result.candidates,
            false_positives = result.false_positives,
            false_negatives = result.false_negatives,
            "trial finished"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use apriori::{Itemset, PresenceTable, apriori::AprioriRunner};
    use tester::test_utils::{from_rows, uniform_table};

    use super::{Experiment, Population};
    use crate::{
        config::ExperimentConfig,
        error::{ConfigError, DomainError, ExperimentError},
        guarantee::CheckOutcome,
        sampler::Replacement,
        theorem::{DatasetParams, RiondatoUpfal, Theorem, Toivonen},
    };

    /// A theorem that asks for an empty sample.
    struct NoRows;
    impl Theorem for NoRows {
        fn name(&self) -> &'static str {
            "none"
        }
        fn replacement(&self) -> Replacement {
            Replacement::Without
        }
        fn validate(&self) -> Result<(), ConfigError> {
            Ok(())
        }
        fn sample_size(
            &self,
            _: &ExperimentConfig,
            _: &impl DatasetParams,
        ) -> Result<usize, DomainError> {
            Ok(0)
        }
        fn sample_threshold(&self, config: &ExperimentConfig, _: usize) -> f64 {
            config.true_support
        }
        fn check(&self, _: &ExperimentConfig, _: f64, _: &[(f64, f64)]) -> CheckOutcome {
            Ok(())
        }
    }

    fn all_columns(table: &PresenceTable, _: f64) -> Vec<Itemset> {
        (0..table.columns()).map(|c| Itemset::from([c])).collect()
    }

    #[test]
    fn test_population() {
        let (data, _) = from_rows(&[&["a", "b", "c"], &["a", "b"], &["c"], &[]]);
        let p = Population::new(data).unwrap();
        assert_eq!(p.dataset_size(), 4);
        assert_eq!(p.total_items(), 3);
        assert_eq!(p.d_bound(), Ok(2));
        assert_eq!(p.universe().column("c"), Some(2));
        assert_eq!(p.universe().name(0), Some("a"));
        // The empty transaction stays as an all-false row
        assert_eq!(p.table().present(3), Vec::<usize>::new());
        let (data, _) = from_rows(&[]);
        assert_eq!(Population::new(data).unwrap_err(), DomainError::EmptyTable);
    }
    #[test]
    fn test_invalid_config() {
        let p = Population::from_table(uniform_table(4, 2, 2)).unwrap();
        let config = ExperimentConfig::default().with_delta(0.0);
        let e = Experiment::new(&p, all_columns, config).err();
        assert!(matches!(e, Some(ExperimentError::Config(_))));
    }
    #[test]
    fn test_exact_sample_has_no_errors() {
        // 200 rows: Toivonen's size exceeds the dataset, so every sample is a permutation
        let p = Population::from_table(uniform_table(200, 100, 100)).unwrap();
        let config = ExperimentConfig::default()
            .with_true_support(0.5)
            .with_epsilon(0.1)
            .with_delta(0.01)
            .with_trials(25)
            .with_seed(3);
        let mut e = Experiment::new(&p, all_columns, config).unwrap();
        assert_eq!(e.true_frequent(), 100);
        let s = e.run(&Toivonen::from_config(e.config())).unwrap();
        assert_eq!(s.sample_size, 200);
        assert_eq!(s.trials.len(), 25);
        assert_eq!(s.violations(), 0);
        assert_eq!(s.false_positives.mean, 0.0);
        assert_eq!(s.false_negatives.mean, 0.0);
        for t in s.trials.iter() {
            assert!(t.reconciliation.iter().all(|c| c.full_support == 0.5 && c.sample_support == 0.5));
        }
    }
    #[test]
    fn test_non_positive_threshold() {
        let p = Population::from_table(uniform_table(10, 3, 5)).unwrap();
        // ε / 2 = 0.25 > true support
        let config = ExperimentConfig::default().with_true_support(0.2).with_epsilon(0.5);
        let mut e = Experiment::new(&p, AprioriRunner::new(), config).unwrap();
        let err = e.run(&RiondatoUpfal::from_config(e.config())).unwrap_err();
        assert!(matches!(
            err,
            ExperimentError::Domain(DomainError::NonPositiveThreshold { .. })
        ));
    }
    #[test]
    fn test_ru_needs_d_bound() {
        // Large enough for Toivonen's lowered threshold to stay positive
        let p = Population::from_table(PresenceTable::new(5000, 2)).unwrap();
        let config = ExperimentConfig::default().with_true_support(0.5);
        let mut e = Experiment::new(&p, AprioriRunner::new(), config).unwrap();
        let err = e.run(&RiondatoUpfal::from_config(e.config())).unwrap_err();
        assert_eq!(err, ExperimentError::Domain(DomainError::NoDBound));
        // Toivonen never reads it
        assert!(e.run(&Toivonen::from_config(e.config())).is_ok());
    }
    #[test]
    fn test_invalid_theorem() {
        let p = Population::from_table(uniform_table(10, 2, 5)).unwrap();
        let config = ExperimentConfig::default().with_true_support(0.5);
        let mut e = Experiment::new(&p, all_columns, config).unwrap();
        let ru = RiondatoUpfal {
            c: 0.0,
            check_almost_frequent: true,
        };
        assert!(matches!(
            e.run(&ru),
            Err(ExperimentError::Config(ConfigError::OutOfRange { name: "ru_c", .. }))
        ));
        for miu in [0.0, 1.5, f64::NAN] {
            assert!(matches!(
                e.run(&Toivonen { miu }),
                Err(ExperimentError::Config(ConfigError::OutOfRange { name: "miu", .. }))
            ));
        }
    }
    #[test]
    fn test_empty_sample() {
        let p = Population::from_table(uniform_table(10, 2, 5)).unwrap();
        let config = ExperimentConfig::default().with_true_support(0.5);
        let mut e = Experiment::new(&p, all_columns, config).unwrap();
        assert_eq!(
            e.run(&NoRows).unwrap_err(),
            ExperimentError::Domain(DomainError::EmptySample)
        );
    }
}
