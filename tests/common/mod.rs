//! Shared test utilities and fixture generators

use polars::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Small credit-style dataset: id, binary target, two numeric features
/// (one with missing values) and two categorical features (one with nulls).
#[allow(dead_code)]
pub fn credit_dataframe() -> DataFrame {
    df! {
        "cust_id" => [1i64, 2, 3, 4, 5, 6, 7, 8],
        "target" => [0i32, 1, 0, 1, 0, 0, 1, 0],
        "loan_amount" => [
            Some(1000.0f64),
            Some(2500.0),
            None,
            Some(f64::NAN),
            Some(1800.0),
            Some(900.0),
            Some(4200.0),
            Some(3100.0),
        ],
        "income" => [30.0f64, 55.0, 42.0, 61.0, 38.0, 29.0, 75.0, 50.0],
        "region" => [
            Some("north"),
            Some("south"),
            Some("north"),
            None,
            Some("east"),
            Some("south"),
            None,
            Some("north"),
        ],
        "grade" => ["A", "B", "A", "C", "B", "A", "C", "A"],
    }
    .unwrap()
}

/// Larger random dataset for end-to-end runs. Deterministic via a fixed seed.
#[allow(dead_code)]
pub fn random_dataframe(rows: usize) -> DataFrame {
    let mut rng = StdRng::seed_from_u64(42);

    let ids: Vec<i64> = (1..=rows as i64).collect();
    let targets: Vec<i32> = (0..rows).map(|_| rng.gen_range(0..=1)).collect();
    let amounts: Vec<Option<f64>> = (0..rows)
        .map(|_| {
            if rng.gen_bool(0.1) {
                None
            } else {
                Some(rng.gen_range(100.0..10_000.0))
            }
        })
        .collect();
    let grades: Vec<&str> = (0..rows)
        .map(|_| ["A", "B", "C", "D"][rng.gen_range(0..4)])
        .collect();

    df! {
        "cust_id" => ids,
        "target" => targets,
        "loan_amount" => amounts,
        "grade" => grades,
    }
    .unwrap()
}

/// Write a DataFrame as CSV into `dir`, returning the file path.
#[allow(dead_code)]
pub fn write_csv(df: &mut DataFrame, dir: &std::path::Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();
    path
}
