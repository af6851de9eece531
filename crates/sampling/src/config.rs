use crate::{error::ConfigError, sample_size::RU_DEFAULT_C};

/// Parameters of one experiment.
/// `miu` is only read by Toivonen, `ru_c` and `check_almost_frequent` only by Riondato-Upfal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperimentConfig {
    pub true_support: f64,
    pub epsilon: f64,
    pub delta: f64,
    pub miu: f64,
    pub trials: usize,
    /// Seeds the sampler; `None` draws a seed from the OS.
    pub seed: Option<u64>,
    pub ru_c: f64,
    pub check_almost_frequent: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            true_support: 0.02,
            epsilon: 0.05,
            delta: 0.01,
            miu: 0.01,
            trials: 10,
            seed: None,
            ru_c: RU_DEFAULT_C,
            check_almost_frequent: true,
        }
    }
}

impl ExperimentConfig {
    pub fn with_true_support(mut self, true_support: f64) -> Self {
        self.true_support = true_support;
        self
    }
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }
    pub fn with_miu(mut self, miu: f64) -> Self {
        self.miu = miu;
        self
    }
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn with_ru_c(mut self, ru_c: f64) -> Self {
        self.ru_c = ru_c;
        self
    }
    pub fn with_almost_frequent_check(mut self, check: bool) -> Self {
        self.check_almost_frequent = check;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        in_range("true_support", self.true_support, "(0, 1]", |v| v > 0.0 && v <= 1.0)?;
        in_range("epsilon", self.epsilon, "(0, 1)", open_unit)?;
        in_range("delta", self.delta, "(0, 1)", open_unit)?;
        in_range("miu", self.miu, "(0, 1)", open_unit)?;
        in_range("ru_c", self.ru_c, "(0, inf)", |v| v > 0.0 && v.is_finite())?;
        if self.trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        Ok(())
    }
}

pub(crate) fn open_unit(v: f64) -> bool {
    v > 0.0 && v < 1.0
}

// NaN fails every comparison, so it is rejected too
pub(crate) fn in_range(
    name: &'static str,
    value: f64,
    range: &'static str,
    ok: impl Fn(f64) -> bool,
) -> Result<(), ConfigError> {
    if ok(value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { name, value, range })
    }
}
