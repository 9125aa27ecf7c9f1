//! Box-plot and histogram statistics over a [`LengthSeries`]

use serde::Serialize;

use super::LengthSeries;

/// Whisker reach, in multiples of the interquartile range
pub const WHISKER_IQR_FACTOR: f64 = 1.5;

/// Five-number summary plus mean and whiskers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthSummary {
    pub count: usize,
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest value within `q1 - 1.5 * IQR`
    pub lower_whisker: usize,
    /// Largest value within `q3 + 1.5 * IQR`
    pub upper_whisker: usize,
    /// Values beyond either whisker
    pub outliers: usize,
}

impl LengthSummary {
    /// `None` for an empty series
    pub fn from_series(series: &LengthSeries) -> Option<Self> {
        if series.is_empty() {
            return None;
        }

        let mut sorted = series.lengths.clone();
        sorted.sort_unstable();

        let count = sorted.len();
        let mean = sorted.iter().sum::<usize>() as f64 / count as f64;
        let q1 = quantile(&sorted, 0.25);
        let median = quantile(&sorted, 0.5);
        let q3 = quantile(&sorted, 0.75);

        let reach = WHISKER_IQR_FACTOR * (q3 - q1);
        let low_fence = q1 - reach;
        let high_fence = q3 + reach;

        // The box always contains data, so both searches succeed; the
        // fallbacks only guard against float edge cases.
        let lower_whisker = sorted
            .iter()
            .copied()
            .find(|&v| v as f64 >= low_fence)
            .unwrap_or(sorted[0]);
        let upper_whisker = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v as f64 <= high_fence)
            .unwrap_or(sorted[count - 1]);
        let outliers = sorted
            .iter()
            .filter(|&&v| v < lower_whisker || v > upper_whisker)
            .count();

        Some(Self {
            count,
            min: sorted[0],
            max: sorted[count - 1],
            mean,
            q1,
            median,
            q3,
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }

    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Quantile with linear interpolation between closest ranks.
///
/// `sorted` must be non-empty and ascending.
fn quantile(sorted: &[usize], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let lo_val = sorted[lo] as f64;
    lo_val + (sorted[hi] as f64 - lo_val) * (pos - lo as f64)
}

/// Equal-width histogram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// `counts.len() + 1` bin edges, ascending
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `series` into `bins` equal-width bins spanning `[min, max]`.
    ///
    /// Every bin is half-open except the last, which also holds `max`. When all
    /// values are equal the range is widened to `[v - 0.5, v + 0.5]`.
    /// `bins == 0` is treated as a single bin.
    pub fn from_series(series: &LengthSeries, bins: usize) -> Self {
        let bins = bins.max(1);
        let (Some(min), Some(max)) = (series.iter().min(), series.iter().max()) else {
            return Self {
                edges: Vec::new(),
                counts: Vec::new(),
            };
        };

        let (lo, hi) = if min == max {
            (min as f64 - 0.5, max as f64 + 0.5)
        } else {
            (min as f64, max as f64)
        };
        let width = (hi - lo) / bins as f64;

        let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();
        let mut counts = vec![0usize; bins];
        for v in series.iter() {
            let idx = (((v as f64 - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Self { edges, counts }
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}
