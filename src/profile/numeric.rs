//! Numeric variable distribution profiling
//!
//! For each numeric column the profiler computes descriptive statistics over
//! the valid (non-missing) rows, partitions those rows into bad (target = 1)
//! and good (target = 0) groups, and renders a weighted overlaid histogram so
//! the two groups are visually comparable regardless of their sizes.

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::Serialize;

use super::columns::{is_missing_numeric, numeric_values, target_values};
use crate::report::{render_histogram, ReportKind, ReportSink};

/// Quantile used for outlier capping in rendered charts
const CAP_QUANTILE: f64 = 0.95;

/// Descriptive statistics over the valid subset of a column.
///
/// All fields are NaN when the subset is empty, and `std` is additionally NaN
/// for a single-value subset (sample standard deviation, ddof = 1). NaN is
/// deliberate output for report reviewers and must not be flattened to zero.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DescribeStats {
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl DescribeStats {
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                mean: f64::NAN,
                median: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                max: f64::NAN,
            };
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let std = if values.len() < 2 {
            f64::NAN
        } else {
            let ss = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
            (ss / (n - 1.0)).sqrt()
        };

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let median = percentile_linear(&sorted, 0.5);

        Self {
            mean,
            median,
            std,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
        }
    }
}

/// One target-class partition of a column's valid rows.
///
/// Each row carries the same weight, 100 / partition size, so a histogram of
/// the partition sums to 100% whatever its size. The weight is infinite for
/// an empty partition and is never consulted in that case.
#[derive(Debug, Clone, Serialize)]
pub struct TargetPartition {
    #[serde(skip)]
    pub values: Vec<f64>,
    pub count: usize,
    pub weight_per_row: f64,
}

impl TargetPartition {
    fn new(values: Vec<f64>) -> Self {
        let count = values.len();
        Self {
            values,
            count,
            weight_per_row: 100.0 / count as f64,
        }
    }
}

/// Computed distribution profile for one numeric column
#[derive(Debug, Clone, Serialize)]
pub struct NumericProfile {
    pub name: String,
    /// Percentage of all rows where the value is present, 0..=100
    pub valid_pct: f64,
    pub stats: DescribeStats,
    pub bad: TargetPartition,
    pub good: TargetPartition,
    /// 95th percentile of the full valid subset, when capping was requested
    pub cap: Option<f64>,
}

impl NumericProfile {
    /// Chart title line: column name plus the descriptive statistics in
    /// scientific notation, matching the report reviewers' expectations.
    pub fn title(&self) -> String {
        format!(
            "{}  ValidPerc:{:.2}%;Mean:{:.2e};Per50:{:.2e};Std:{:.2e};Max:{:.2e};Min:{:.2e}",
            self.name,
            self.valid_pct,
            self.stats.mean,
            self.stats.median,
            self.stats.std,
            self.stats.max,
            self.stats.min,
        )
    }
}

/// Compute the distribution profile of one numeric column against the target.
///
/// Rows enter the valid subset when the column value is present (not null,
/// not NaN); the target value plays no part in that selection. Partition
/// weights are fixed before capping so capping only moves rendered values.
pub fn profile_numeric_column(
    df: &DataFrame,
    var: &str,
    target: &str,
    truncate: bool,
) -> Result<NumericProfile> {
    let values = numeric_values(df, var)?;
    let targets = target_values(df, target)?;
    let total = df.height();

    let mut valid: Vec<f64> = Vec::new();
    let mut bad: Vec<f64> = Vec::new();
    let mut good: Vec<f64> = Vec::new();

    for (value, t) in values.into_iter().zip(targets) {
        if is_missing_numeric(value) {
            continue;
        }
        let v = value.unwrap_or(f64::NAN);
        valid.push(v);
        if t == 1.0 {
            bad.push(v);
        } else if t == 0.0 {
            good.push(v);
        }
    }

    let valid_pct = 100.0 * valid.len() as f64 / total as f64;
    let stats = DescribeStats::from_values(&valid);

    let cap = if truncate {
        let mut sorted = valid.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        Some(percentile_linear(&sorted, CAP_QUANTILE))
    } else {
        None
    };

    let mut bad = TargetPartition::new(bad);
    let mut good = TargetPartition::new(good);
    if let Some(cap) = cap {
        // Upper tail only: min(value, p95)
        for v in bad.values.iter_mut().chain(good.values.iter_mut()) {
            *v = v.min(cap);
        }
    }

    Ok(NumericProfile {
        name: var.to_string(),
        valid_pct,
        stats,
        bad,
        good,
        cap,
    })
}

/// Profile a list of numeric columns: compute statistics, render one
/// histogram per column under the sink's root and register each chart in the
/// "num" report index.
///
/// Columns commit independently; a failure leaves earlier columns' charts
/// and index entries in place.
pub fn numeric_var_report(
    df: &DataFrame,
    vars: &[String],
    target: &str,
    sink: &ReportSink,
    truncate: bool,
) -> Result<Vec<NumericProfile>> {
    let mut profiles = Vec::with_capacity(vars.len());

    for var in vars {
        let profile = profile_numeric_column(df, var, target, truncate)?;
        let chart_path = sink.chart_path(var);
        render_histogram(&profile, &chart_path)
            .with_context(|| format!("Failed to render histogram for '{}'", var))?;
        sink.add_entry(ReportKind::Num, var)?;
        profiles.push(profile);
    }

    Ok(profiles)
}

/// Linearly interpolated percentile over already-sorted values
/// (numpy.percentile's default method). NaN for an empty slice.
pub(crate) fn percentile_linear(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + frac * (sorted[upper] - sorted[lower])
}
