use std::fmt;

use thiserror::Error;

/// Which probabilistic promise a trial broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachKind {
    /// `|full − sample|` exceeded the tolerated error.
    Accuracy,
    /// Sample support fell below the lowered sample threshold.
    MissedOnSample,
    /// Full support fell below `true_support − ε`.
    AlmostFrequent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Breach {
    pub kind: BreachKind,
    pub offending: usize,
    pub candidates: usize,
    /// The largest tolerated fraction of offending candidates.
    pub bound: f64,
}

impl Breach {
    pub fn rate(&self) -> f64 {
        self.offending as f64 / self.candidates as f64
    }
}

impl fmt::Display for Breach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}: {}/{} candidates ({:.4} > {})",
            self.kind,
            self.offending,
            self.candidates,
            self.rate(),
            self.bound
        )
    }
}

/// The empirical error rate of a trial exceeded a theorem's bound.
/// Expected now and then; recorded per trial, never fatal.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{theorem} guarantee violated: {}", display_breaches(.breaches))]
pub struct GuaranteeViolation {
    pub theorem: &'static str,
    pub breaches: Vec<Breach>,
}

fn display_breaches(breaches: &[Breach]) -> String {
    breaches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type CheckOutcome = Result<(), GuaranteeViolation>;

/// Counts offending candidates per rule and turns the rules over their bound into a violation.
struct Tally<'a> {
    pairs: &'a [(f64, f64)],
    breaches: Vec<Breach>,
}

impl<'a> Tally<'a> {
    fn new(pairs: &'a [(f64, f64)]) -> Self {
        Self {
            pairs,
            breaches: Vec::new(),
        }
    }
    fn rule(mut self, kind: BreachKind, bound: f64, offends: impl Fn(f64, f64) -> bool) -> Self {
        let offending = self
            .pairs
            .iter()
            .filter(|&&(full, sample)| offends(full, sample))
            .count();
        let breach = Breach {
            kind,
            offending,
            candidates: self.pairs.len(),
            bound,
        };
        // No candidates, no evidence
        if !self.pairs.is_empty() && breach.rate() > bound {
            self.breaches.push(breach);
        }
        self
    }
    fn finish(self, theorem: &'static str) -> CheckOutcome {
        if self.breaches.is_empty() {
            Ok(())
        } else {
            Err(GuaranteeViolation {
                theorem,
                breaches: self.breaches,
            })
        }
    }
}

/// Toivonen: at most a δ fraction of candidates may be off by more than ε, and at
/// most a μ fraction may sit below the lowered sample threshold.
/// `pairs` are `(full support, sample support)`.
pub fn check_toivonen(
    pairs: &[(f64, f64)],
    epsilon: f64,
    delta: f64,
    miu: f64,
    sample_threshold: f64,
) -> CheckOutcome {
    Tally::new(pairs)
        .rule(BreachKind::Accuracy, delta, |full, sample| {
            (full - sample).abs() > epsilon
        })
        .rule(BreachKind::MissedOnSample, miu, |_, sample| {
            sample < sample_threshold
        })
        .finish(crate::theorem::TOIVONEN)
}

/// Riondato-Upfal: at most a δ fraction of candidates may be off by more than ε / 2.
/// With `almost_frequent`, at most a δ fraction may have full support under
/// `true_support − ε`.
pub fn check_ru(
    pairs: &[(f64, f64)],
    epsilon: f64,
    delta: f64,
    true_support: f64,
    almost_frequent: bool,
) -> CheckOutcome {
    let tally = Tally::new(pairs).rule(BreachKind::Accuracy, delta, |full, sample| {
        (full - sample).abs() > epsilon / 2.0
    });
    let tally = if almost_frequent {
        tally.rule(BreachKind::AlmostFrequent, delta, |full, _| {
            full < true_support - epsilon
        })
    } else {
        tally
    };
    tally.finish(crate::theorem::RIONDATO_UPFAL)
}
