use std::fmt;

/// The constant `c` of the Riondato-Upfal bound.
pub const RU_DEFAULT_C: f64 = 0.5;

/// Sample sizes for ε from `CURVE_START` up to `CURVE_END` (exclusive), in `CURVE_STEP` steps.
pub const CURVE_START: f64 = 1e-4;
pub const CURVE_END: f64 = 0.2;
pub const CURVE_STEP: f64 = 1e-3;
/// The two failure probabilities compared by [`SizeCurve`].
pub const CURVE_DELTAS: [f64; 2] = [1e-4, 0.01];

/// `min(n, ceil((1 / ε²) · (items + ln(2 / δ))))`
pub fn toivonen_sample_size(
    epsilon: f64,
    delta: f64,
    total_items: usize,
    dataset_size: usize,
) -> usize {
    let size = (1.0 / epsilon.powi(2)) * (total_items as f64 + (2.0 / delta).ln());
    cap(size, dataset_size)
}

/// The lowered support at which sample itemsets are kept:
/// `true_support − sqrt(ln(1 / μ) / (2 · sample_size))`.
pub fn toivonen_threshold(true_support: f64, miu: f64, sample_size: usize) -> f64 {
    true_support - ((1.0 / miu).ln() / (2.0 * sample_size as f64)).sqrt()
}

/// `min(n, ceil((4c / ε²) · (d + ln(1 / δ))))`
pub fn ru_sample_size(epsilon: f64, delta: f64, d_bound: usize, c: f64, dataset_size: usize) -> usize {
    let size = (4.0 * c / epsilon.powi(2)) * (d_bound as f64 + (1.0 / delta).ln());
    cap(size, dataset_size)
}

/// `true_support − ε / 2`
pub fn ru_threshold(true_support: f64, epsilon: f64) -> f64 {
    true_support - epsilon / 2.0
}

// Casting saturates, so astronomically large sizes still cap at the dataset size
fn cap(size: f64, dataset_size: usize) -> usize {
    (size.ceil() as usize).min(dataset_size)
}

/// One row of a [`SizeCurve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizePoint {
    pub epsilon: f64,
    /// Toivonen then Riondato-Upfal size, per entry of [`CURVE_DELTAS`].
    pub sizes: [(usize, usize); 2],
}

/// Both sample sizes as a function of ε, for two failure probabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeCurve {
    pub points: Vec<SizePoint>,
}

impl SizeCurve {
    pub fn new(total_items: usize, d_bound: usize, dataset_size: usize) -> Self {
        let steps = ((CURVE_END - CURVE_START) / CURVE_STEP).ceil() as usize;
        let points = (0..steps)
            .map(|i| CURVE_START + i as f64 * CURVE_STEP)
            .take_while(|&e| e < CURVE_END)
            .map(|epsilon| {
                let sizes = CURVE_DELTAS.map(|delta| {
                    (
                        toivonen_sample_size(epsilon, delta, total_items, dataset_size),
                        ru_sample_size(epsilon, delta, d_bound, RU_DEFAULT_C, dataset_size),
                    )
                });
                SizePoint { epsilon, sizes }
            })
            .collect();
        Self { points }
    }
}

impl fmt::Display for SizeCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>8}", "epsilon")?;
        for delta in CURVE_DELTAS {
            write!(f, " {:>18} {:>18}", format!("toivonen d={delta}"), format!("ru d={delta}"))?;
        }
        writeln!(f)?;
        for p in self.points.iter() {
            write!(f, "{:>8.4}", p.epsilon)?;
            for (t, r) in p.sizes {
                write!(f, " {t:>18} {r:>18}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
