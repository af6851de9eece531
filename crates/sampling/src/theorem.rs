use crate::{
    config::{ExperimentConfig, in_range, open_unit},
    error::{ConfigError, DomainError},
    guarantee::{CheckOutcome, check_ru, check_toivonen},
    sample_size::{ru_sample_size, ru_threshold, toivonen_sample_size, toivonen_threshold},
    sampler::Replacement,
};

pub const TOIVONEN: &str = "Toivonen";
pub const RIONDATO_UPFAL: &str = "Riondato-Upfal";

/// The dataset statistics a sample-size formula may read.
pub trait DatasetParams {
    fn dataset_size(&self) -> usize;
    fn total_items(&self) -> usize;
    fn d_bound(&self) -> Result<usize, DomainError>;
}

/// A sampling theorem: how big a sample to draw, how to draw it, where to cut
/// sample supports, and what its guarantee promises about the result.
pub trait Theorem {
    fn name(&self) -> &'static str;
    fn replacement(&self) -> Replacement;
    /// Rejects parameters the theorem carries outside the shared config.
    fn validate(&self) -> Result<(), ConfigError>;
    fn sample_size(
        &self,
        config: &ExperimentConfig,
        params: &impl DatasetParams,
    ) -> Result<usize, DomainError>;
    fn sample_threshold(&self, config: &ExperimentConfig, sample_size: usize) -> f64;
    fn check(
        &self,
        config: &ExperimentConfig,
        sample_threshold: f64,
        pairs: &[(f64, f64)],
    ) -> CheckOutcome;
}

/// Toivonen's sampling: without replacement, sized by the item count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Toivonen {
    pub miu: f64,
}

impl Toivonen {
    pub fn from_config(config: &ExperimentConfig) -> Self {
        Self { miu: config.miu }
    }
}

impl Theorem for Toivonen {
    fn name(&self) -> &'static str {
        TOIVONEN
    }
    fn replacement(&self) -> Replacement {
        Replacement::Without
    }
    fn validate(&self) -> Result<(), ConfigError> {
        in_range("miu", self.miu, "(0, 1)", open_unit)
    }
    fn sample_size(
        &self,
        config: &ExperimentConfig,
        params: &impl DatasetParams,
    ) -> Result<usize, DomainError> {
        Ok(toivonen_sample_size(
            config.epsilon,
            config.delta,
            params.total_items(),
            params.dataset_size(),
        ))
    }
    fn sample_threshold(&self, config: &ExperimentConfig, sample_size: usize) -> f64 {
        toivonen_threshold(config.true_support, self.miu, sample_size)
    }
    fn check(
        &self,
        config: &ExperimentConfig,
        sample_threshold: f64,
        pairs: &[(f64, f64)],
    ) -> CheckOutcome {
        check_toivonen(pairs, config.epsilon, config.delta, self.miu, sample_threshold)
    }
}

/// Riondato and Upfal's PAC bound: with replacement, sized by the d-bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiondatoUpfal {
    pub c: f64,
    pub check_almost_frequent: bool,
}

impl RiondatoUpfal {
    pub fn from_config(config: &ExperimentConfig) -> Self {
        Self {
            c: config.ru_c,
            check_almost_frequent: config.check_almost_frequent,
        }
    }
}

impl Theorem for RiondatoUpfal {
    fn name(&self) -> &'static str {
        RIONDATO_UPFAL
    }
    fn replacement(&self) -> Replacement {
        Replacement::With
    }
    fn validate(&self) -> Result<(), ConfigError> {
        in_range("ru_c", self.c, "(0, inf)", |v| v > 0.0 && v.is_finite())
    }
    fn sample_size(
        &self,
        config: &ExperimentConfig,
        params: &impl DatasetParams,
    ) -> Result<usize, DomainError> {
        Ok(ru_sample_size(
            config.epsilon,
            config.delta,
            params.d_bound()?,
            self.c,
            params.dataset_size(),
        ))
    }
    fn sample_threshold(&self, config: &ExperimentConfig, _: usize) -> f64 {
        ru_threshold(config.true_support, config.epsilon)
    }
    fn check(&self, config: &ExperimentConfig, _: f64, pairs: &[(f64, f64)]) -> CheckOutcome {
        check_ru(
            pairs,
            config.epsilon,
            config.delta,
            config.true_support,
            self.check_almost_frequent,
        )
    }
}
