use thiserror::Error;

/// Invalid or degenerate input to a pure computation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("an itemset must contain at least one item")]
    EmptyItemset,
    #[error("item {item} is not a column of a table with {columns} columns")]
    UnknownItem { item: usize, columns: usize },
    #[error("support is undefined over a table with no rows")]
    EmptyTable,
    #[error("no d-bound exists: no length k is reached by k distinct transactions")]
    NoDBound,
    #[error("adjusted sample support threshold {threshold} is not positive")]
    NonPositiveThreshold { threshold: f64 },
    #[error("the sample size is zero")]
    EmptySample,
}

/// A configuration value rejected at experiment setup.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} = {value} is outside {range}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        range: &'static str,
    },
    #[error("an experiment needs at least one trial")]
    ZeroTrials,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExperimentError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}
