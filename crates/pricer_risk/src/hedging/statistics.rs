//! PnL distribution statistics.

/// Percentiles of a PnL distribution, linearly interpolated between order
/// statistics.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PnlPercentiles {
    /// 5th percentile
    pub p5: f64,
    /// 25th percentile
    pub p25: f64,
    /// Median
    pub p50: f64,
    /// 75th percentile
    pub p75: f64,
    /// 95th percentile
    pub p95: f64,
}

/// Summary statistics of a PnL sample.
///
/// Standard deviation and variance are population moments (divide by `n`).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PnlStatistics {
    /// Mean PnL
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Population variance
    pub variance: f64,
    /// Worst PnL
    pub min: f64,
    /// Best PnL
    pub max: f64,
    /// Distribution percentiles
    pub percentiles: PnlPercentiles,
}

impl PnlStatistics {
    /// Computes statistics over `samples`; `None` when empty.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        let (&min, &max) = (sorted.first()?, sorted.last()?);

        Some(Self {
            mean,
            std_dev: variance.sqrt(),
            variance,
            min,
            max,
            percentiles: PnlPercentiles {
                p5: percentile_sorted(&sorted, 5.0)?,
                p25: percentile_sorted(&sorted, 25.0)?,
                p50: percentile_sorted(&sorted, 50.0)?,
                p75: percentile_sorted(&sorted, 75.0)?,
                p95: percentile_sorted(&sorted, 95.0)?,
            },
        })
    }
}

/// `q`-th percentile (0-100) of ascending `sorted`, interpolating linearly
/// at rank `q/100 · (n - 1)`; `None` when `sorted` is empty.
pub fn percentile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let rank = (q / 100.0).clamp(0.0, 1.0) * last as f64;
    let lower = sorted[rank.floor() as usize];
    let upper = sorted[rank.ceil() as usize];
    Some(lower + (upper - lower) * rank.fract())
}
