//! Categorical variable distribution profiling
//!
//! For each categorical column the profiler computes, per distinct category,
//! its share of the total row count and the bad rate among its rows. Missing
//! cells form a synthetic category of their own so the report shows how the
//! absence of a value correlates with the target.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::Serialize;

use super::columns::{string_values, target_values};
use crate::report::{render_category_chart, ReportKind, ReportSink};

/// Key of the synthetic category collecting rows with a missing value
pub const MISSING_CATEGORY: &str = "missValue";

/// Share and bad rate of one category
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategoryStats {
    /// Category rows / total rows (total, not valid)
    pub share: f64,
    /// Sum of target over category rows / category rows; NaN when the
    /// category's target values are not coercible
    pub bad_rate: f64,
}

/// Computed frequency profile for one categorical column
#[derive(Debug, Clone, Serialize)]
pub struct CategoricalProfile {
    pub name: String,
    /// Percentage of all rows where the value is present, 0..=100
    pub valid_pct: f64,
    /// Categories in ascending key order, the synthetic missing category
    /// sorted among them
    pub categories: Vec<(String, CategoryStats)>,
}

impl CategoricalProfile {
    /// Chart title for the dual-axis category chart
    pub fn title(&self) -> String {
        format!(
            "The percentage and bad rate for {} (valid {:.2}%)",
            self.name, self.valid_pct
        )
    }
}

/// Compute the frequency/bad-rate profile of one categorical column.
///
/// Shares divide by the total row count; bad rates divide by the category's
/// own row count. The two denominators are contractual and must not be
/// unified. When the column has missing cells, a `missValue` category is
/// synthesized with share `1 - valid fraction` and a bad rate computed over
/// exactly the missing rows.
pub fn profile_categorical_column(
    df: &DataFrame,
    var: &str,
    target: &str,
) -> Result<CategoricalProfile> {
    let values = string_values(df, var)?;
    let targets = target_values(df, target)?;
    let total = df.height() as f64;

    let mut groups: BTreeMap<String, (usize, f64)> = BTreeMap::new();
    let mut valid_count = 0usize;
    let mut missing_count = 0usize;
    let mut missing_target_sum = 0.0f64;

    for (value, t) in values.into_iter().zip(targets) {
        match value {
            Some(category) => {
                valid_count += 1;
                let entry = groups.entry(category).or_insert((0, 0.0));
                entry.0 += 1;
                entry.1 += t;
            }
            None => {
                missing_count += 1;
                missing_target_sum += t;
            }
        }
    }

    let valid_fraction = valid_count as f64 / total;
    if missing_count > 0 {
        groups.insert(
            MISSING_CATEGORY.to_string(),
            (missing_count, missing_target_sum),
        );
    }

    let categories = groups
        .into_iter()
        .map(|(category, (count, target_sum))| {
            let share = if category == MISSING_CATEGORY {
                1.0 - valid_fraction
            } else {
                count as f64 / total
            };
            let bad_rate = target_sum / count as f64;
            (category, CategoryStats { share, bad_rate })
        })
        .collect();

    Ok(CategoricalProfile {
        name: var.to_string(),
        valid_pct: 100.0 * valid_fraction,
        categories,
    })
}

/// Profile a list of categorical columns: compute category statistics,
/// render one dual-axis chart per column under the sink's root and register
/// each chart in the "str" report index.
pub fn str_var_report(
    df: &DataFrame,
    vars: &[String],
    target: &str,
    sink: &ReportSink,
) -> Result<Vec<CategoricalProfile>> {
    let mut profiles = Vec::with_capacity(vars.len());

    for var in vars {
        let profile = profile_categorical_column(df, var, target)?;
        let chart_path = sink.chart_path(var);
        render_category_chart(&profile, &chart_path)
            .with_context(|| format!("Failed to render category chart for '{}'", var))?;
        sink.add_entry(ReportKind::Str, var)?;
        profiles.push(profile);
    }

    Ok(profiles)
}
