use libm::sqrt;

/// Summary of how sentence-level values spread across a document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionStats {
    /// The arithmetic mean of the sampled values.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl DistributionStats {
    const EMPTY: Self = Self { mean: 0.0, std_dev: 0.0, min: 0.0, max: 0.0 };
}

/// Calculates mean, standard deviation and range for a slice of values.
///
/// Used to report how evenly complexity is distributed over the sentences
/// of a document; two documents with the same average can differ a lot here.
pub fn compute_stats(values: &[f64]) -> DistributionStats {
    if values.is_empty() {
        return DistributionStats::EMPTY;
    }

    let len = values.len() as f64;

    let mean = values.iter().sum::<f64>() / len;

    // Variance is the average of the squared differences from the mean.
    let variance = values.iter()
        .map(|value| {
            let diff = mean - value;
            diff * diff
        })
        .sum::<f64>() / len;

    let (min, max) = values.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    });

    DistributionStats {
        mean,
        std_dev: sqrt(variance),
        min,
        max,
    }
}
