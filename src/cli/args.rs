//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Varprof - Profile a labeled dataset before credit-scoring model development
#[derive(Parser, Debug)]
#[command(name = "varprof")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path (CSV or Parquet)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Identifier (primary key) column name, excluded from profiling
    #[arg(long)]
    pub id: String,

    /// Binary 0/1 target column name
    #[arg(short, long)]
    pub target: String,

    /// Output directory for charts and index pages.
    /// Created if it does not exist.
    #[arg(short, long, default_value = "varprof_report")]
    pub output: PathBuf,

    /// Cap rendered histogram values at the 95th percentile of each column's
    /// valid values (upper tail only)
    #[arg(long)]
    pub truncate: bool,

    /// File path for a plain-text dump of per-column missing rates.
    /// Written as `name: rate` lines, numeric and categorical sections combined.
    #[arg(long)]
    pub missing_dump: Option<PathBuf>,

    /// Write a JSON export of all computed profiles next to the charts
    #[arg(long)]
    pub export_json: bool,

    /// Numeric elapsed-time column for time-window counting
    #[arg(long)]
    pub elapsed_column: Option<String>,

    /// Time-window thresholds (comma-separated); rows with elapsed time at or
    /// below each threshold are counted. Requires --elapsed-column.
    #[arg(long, value_delimiter = ',')]
    pub windows: Vec<i64>,

    /// Max-bin share above which a categorical feature is flagged as
    /// dominated by a single category (0.0 to 1.0)
    #[arg(long, default_value = "0.9", value_parser = validate_share)]
    pub dominance_threshold: f64,

    /// Number of rows to use for schema inference (CSV only).
    /// Higher values improve type detection for ambiguous columns but may be slower.
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}

fn validate_share(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(format!("share must be between 0.0 and 1.0, got {}", value));
    }
    Ok(value)
}
