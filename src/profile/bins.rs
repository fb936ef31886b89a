//! Max-bin percentage calculation
//!
//! A single category holding most of a column's rows is a red flag for that
//! column's usefulness as a predictor; this module computes the per-category
//! share mapping a reviewer scans for such dominance.

use std::collections::BTreeMap;

use anyhow::Result;
use polars::prelude::*;

use super::columns::string_values;

/// Share of total rows per distinct value of a column, sorted ascending by
/// share with the category name as tie-break. Missing cells form no group,
/// so the shares sum to the column's valid fraction.
pub fn max_bin_percentages(df: &DataFrame, col: &str) -> Result<Vec<(String, f64)>> {
    let values = string_values(df, col)?;
    let total = df.height() as f64;

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for value in values.into_iter().flatten() {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut shares: Vec<(String, f64)> = counts
        .into_iter()
        .map(|(category, count)| (category, count as f64 / total))
        .collect();
    shares.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    Ok(shares)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_ascending_by_share() {
        let df = df! {
            "grade" => ["A", "A", "A", "B"],
        }
        .unwrap();

        let shares = max_bin_percentages(&df, "grade").unwrap();
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].0, "B");
        assert!((shares[0].1 - 0.25).abs() < 1e-9);
        assert_eq!(shares[1].0, "A");
        assert!((shares[1].1 - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_equal_shares_tie_break_on_name() {
        let df = df! {
            "grade" => ["B", "A"],
        }
        .unwrap();

        let shares = max_bin_percentages(&df, "grade").unwrap();
        assert_eq!(shares[0].0, "A");
        assert_eq!(shares[1].0, "B");
    }

    #[test]
    fn test_missing_rows_excluded_from_groups() {
        let df = df! {
            "grade" => [Some("A"), Some("A"), None, None],
        }
        .unwrap();

        let shares = max_bin_percentages(&df, "grade").unwrap();
        assert_eq!(shares, vec![("A".to_string(), 0.5)]);
    }
}
