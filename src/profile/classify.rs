//! Column classification into numeric and categorical kinds
//!
//! Classification happens once, up front, and the resulting lists route every
//! downstream operation. Numeric routing means distribution statistics and
//! histograms; categorical routing means frequency and bad-rate analysis.

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::Serialize;

/// Kind of a feature column, decided by its declared dtype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

/// Classify a single dtype: numeric iff it is a primitive numeric type
/// (fixed- or floating-point). Everything else, including booleans and
/// temporal types, is treated as categorical.
pub fn column_kind(dtype: &DataType) -> ColumnKind {
    if dtype.is_primitive_numeric() {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    }
}

/// Split feature column names into categorical and numeric lists.
///
/// The identifier and target columns are excluded from both lists. The two
/// lists are disjoint, preserve dataset column order, and together cover
/// every remaining column.
///
/// # Errors
/// Fails when the identifier or target column is not present.
pub fn split_columns(
    df: &DataFrame,
    id_column: &str,
    target_column: &str,
) -> Result<(Vec<String>, Vec<String>)> {
    df.column(id_column)
        .with_context(|| format!("Identifier column '{}' not found", id_column))?;
    df.column(target_column)
        .with_context(|| format!("Target column '{}' not found", target_column))?;

    let mut str_vars: Vec<String> = Vec::new();
    let mut num_vars: Vec<String> = Vec::new();

    for name in df.get_column_names() {
        let name = name.as_str();
        if name == id_column || name == target_column {
            continue;
        }
        match column_kind(df.column(name)?.dtype()) {
            ColumnKind::Numeric => num_vars.push(name.to_string()),
            ColumnKind::Categorical => str_vars.push(name.to_string()),
        }
    }

    Ok((str_vars, num_vars))
}
