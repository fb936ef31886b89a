//! Tests for categorical distribution profiling

use polars::prelude::*;
use varprof::profile::{profile_categorical_column, MISSING_CATEGORY};

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_shares_sum_to_one_with_missing_category() {
    let df = common::credit_dataframe();

    // region has 2 null rows out of 8
    let profile = profile_categorical_column(&df, "region", "target").unwrap();

    let share_sum: f64 = profile.categories.iter().map(|(_, s)| s.share).sum();
    assert!(
        (share_sum - 1.0).abs() < 1e-9,
        "shares including the missing category must sum to 1, got {}",
        share_sum
    );
    assert!(profile
        .categories
        .iter()
        .any(|(k, _)| k == MISSING_CATEGORY));
}

#[test]
fn test_shares_sum_to_valid_fraction_without_missing() {
    let df = common::credit_dataframe();

    let profile = profile_categorical_column(&df, "grade", "target").unwrap();

    let share_sum: f64 = profile.categories.iter().map(|(_, s)| s.share).sum();
    assert!((share_sum - 1.0).abs() < 1e-9);
    assert!(
        !profile.categories.iter().any(|(k, _)| k == MISSING_CATEGORY),
        "no synthetic category when nothing is missing"
    );
    assert!((profile.valid_pct - 100.0).abs() < 1e-9);
}

#[test]
fn test_bad_rate_within_unit_interval() {
    let df = common::credit_dataframe();

    for col in ["region", "grade"] {
        let profile = profile_categorical_column(&df, col, "target").unwrap();
        for (category, stats) in &profile.categories {
            assert!(
                (0.0..=1.0).contains(&stats.bad_rate),
                "bad rate of '{}' out of range: {}",
                category,
                stats.bad_rate
            );
        }
    }
}

#[test]
fn test_category_denominators() {
    let df = df! {
        "grade" => [Some("A"), Some("A"), Some("B"), None],
        "target" => [1i32, 0, 1, 1],
    }
    .unwrap();

    let profile = profile_categorical_column(&df, "grade", "target").unwrap();

    let find = |key: &str| {
        profile
            .categories
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, s)| *s)
            .unwrap()
    };

    // share divides by total rows (4), bad rate by category rows
    let a = find("A");
    assert!((a.share - 0.5).abs() < 1e-9);
    assert!((a.bad_rate - 0.5).abs() < 1e-9);

    let b = find("B");
    assert!((b.share - 0.25).abs() < 1e-9);
    assert!((b.bad_rate - 1.0).abs() < 1e-9);

    let missing = find(MISSING_CATEGORY);
    assert!((missing.share - 0.25).abs() < 1e-9);
    assert!((missing.bad_rate - 1.0).abs() < 1e-9);
}

#[test]
fn test_null_target_makes_bad_rate_nan_not_zero() {
    let df = df! {
        "grade" => ["A", "A"],
        "target" => [Some(1i32), None],
    }
    .unwrap();

    let profile = profile_categorical_column(&df, "grade", "target").unwrap();
    assert!(profile.categories[0].1.bad_rate.is_nan());
}

#[test]
fn test_deterministic_ascending_order() {
    let df = df! {
        "grade" => [Some("b"), Some("a"), None, Some("z"), Some("a")],
        "target" => [0i32, 1, 0, 1, 0],
    }
    .unwrap();

    let profile = profile_categorical_column(&df, "grade", "target").unwrap();
    let keys: Vec<&str> = profile.categories.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["a", "b", MISSING_CATEGORY, "z"]);
}

#[test]
fn test_numeric_dtype_column_profiles_as_categories() {
    let df = df! {
        "bucket" => [1i32, 1, 2, 2, 2],
        "target" => [0i32, 1, 0, 0, 1],
    }
    .unwrap();

    let profile = profile_categorical_column(&df, "bucket", "target").unwrap();
    let keys: Vec<&str> = profile.categories.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["1", "2"]);
    assert!((profile.categories[1].1.share - 0.6).abs() < 1e-9);
}

#[test]
fn test_unknown_column_fails() {
    let df = common::credit_dataframe();
    assert!(profile_categorical_column(&df, "nope", "target").is_err());
}
