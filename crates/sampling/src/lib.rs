//! Checks sampling theorems for approximate frequent-itemset mining.
//!
//! A sample is drawn with the size Toivonen's algorithm or the Riondato-Upfal
//! bound prescribes, mined at a lowered support, and every itemset found is
//! measured again on the full dataset. The differences are tallied into false
//! positives, false negatives and guarantee violations over repeated trials.

pub mod config;
pub mod d_bound;
pub mod error;
pub mod experiment;
pub mod guarantee;
pub mod reconcile;
pub mod sample_size;
pub mod sampler;
pub mod summary;
pub mod support;
pub mod theorem;

pub use config::ExperimentConfig;
pub use error::{ConfigError, DomainError, ExperimentError};
pub use experiment::{Experiment, Population};
pub use guarantee::{BreachKind, CheckOutcome, GuaranteeViolation};
pub use summary::{CandidateListing, ExperimentSummary, Stats, TrialResult};
pub use theorem::{DatasetParams, RiondatoUpfal, Theorem, Toivonen};
