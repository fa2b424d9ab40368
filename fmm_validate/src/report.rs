//! Plain-text console reports for the result aggregates.

use core::fmt;

use fmm_core::Stats;

use crate::results::{DistanceValueStats, GradientMagnitudeStats};

/// Short name of a scalar type, e.g. `f32` rather than a full path.
fn scalar_name<T>() -> &'static str {
    let name = core::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

fn write_stats(f: &mut fmt::Formatter<'_>, stats: &Stats, suffix: &str) -> fmt::Result {
    writeln!(f, "min{}: {}", suffix, stats.min)?;
    writeln!(f, "max{}: {}", suffix, stats.max)?;
    writeln!(f, "avg{}: {}", suffix, stats.avg)?;
    write!(f, "std_dev{}: {}", suffix, stats.std_dev)
}

impl<T, const N: usize> fmt::Display for GradientMagnitudeStats<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gradient magnitude stats <{}, {}>:", scalar_name::<T>(), N)?;
        write_stats(f, self.stats(), "")
    }
}

impl<T, const N: usize> fmt::Display for DistanceValueStats<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Distance value stats <{}, {}>:", scalar_name::<T>(), N)?;
        write_stats(f, self.stats(), " error")
    }
}
