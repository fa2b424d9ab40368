//! Summary statistics over scalar sequences.

use num_traits::Float;

/// Minimum, maximum, mean and population standard deviation of a sequence.
///
/// Always stored in `f64`, whatever the precision of the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Arithmetic mean.
    pub avg: f64,
    /// Population standard deviation (divisor is the count).
    pub std_dev: f64,
}

impl Stats {
    /// The statistics of an empty sequence: every field is NaN.
    pub const EMPTY: Self = Self {
        min: f64::NAN,
        max: f64::NAN,
        avg: f64::NAN,
        std_dev: f64::NAN,
    };

    /// Whether these are the statistics of an empty sequence.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.is_nan() && self.max.is_nan() && self.avg.is_nan() && self.std_dev.is_nan()
    }
}

/// Compute [`Stats`] over `values` with two passes in double precision.
///
/// The first pass accumulates min, max and sum; the second accumulates squared deviations
/// from the mean. An empty slice yields [`Stats::EMPTY`]; any NaN makes every field NaN.
///
/// # Example
/// ```
/// use fmm_core::stats::stats;
///
/// let s = stats(&[1.0f32, 2.0, 3.0, 4.0]);
/// assert_eq!((s.min, s.max, s.avg), (1.0, 4.0, 2.5));
/// assert!((s.std_dev - 1.118033988749895).abs() < 1e-15);
/// ```
pub fn stats<T: Float>(values: &[T]) -> Stats {
    if values.is_empty() {
        return Stats::EMPTY;
    }

    let mut sum = 0.0f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut has_nan = false;
    for &v in values {
        let v = to_f64(v);
        sum += v;
        has_nan |= v.is_nan();
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    // NaN propagates to every field, like the mean.
    if has_nan {
        min = f64::NAN;
        max = f64::NAN;
    }
    let count = values.len() as f64;
    let avg = sum / count;

    let variance = values
        .iter()
        .map(|&v| {
            let d = to_f64(v) - avg;
            d * d
        })
        .sum::<f64>()
        / count;

    Stats {
        min,
        max,
        avg,
        std_dev: Float::sqrt(variance),
    }
}

#[inline]
fn to_f64<T: Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}
