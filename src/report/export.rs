//! JSON export of computed profiles
//!
//! Alongside the charts, a run can emit a machine-readable snapshot of every
//! computed statistic. NaN values serialize as JSON null.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::profile::{CategoricalProfile, NumericProfile};

/// Metadata about the profiling run
#[derive(Debug, Serialize)]
pub struct ExportMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// Varprof version
    pub varprof_version: String,
    /// Input file path
    pub input_file: String,
    /// Identifier column name
    pub id_column: String,
    /// Target column name
    pub target_column: String,
    /// Row count of the profiled dataset
    pub rows: usize,
    /// Whether 95th-percentile capping was applied to rendered values
    pub truncated: bool,
}

impl ExportMetadata {
    pub fn new(
        input_file: &Path,
        id_column: &str,
        target_column: &str,
        rows: usize,
        truncated: bool,
    ) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            varprof_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: input_file.display().to_string(),
            id_column: id_column.to_string(),
            target_column: target_column.to_string(),
            rows,
            truncated,
        }
    }
}

/// Complete profile export: metadata plus every computed profile
#[derive(Debug, Serialize)]
pub struct ProfileExport<'a> {
    pub metadata: ExportMetadata,
    pub numeric: &'a [NumericProfile],
    pub categorical: &'a [CategoricalProfile],
}

/// Serialize the export as pretty JSON to `path`, overwriting.
pub fn write_profile_export(export: &ProfileExport<'_>, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(export).context("Failed to serialize profiles")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write profile export to {}", path.display()))
}
