//! Report output sink: chart locations and per-kind HTML index pages
//!
//! The sink owns the output directory. Profiling functions take it as an
//! explicit collaborator and register each written chart with `add_entry`
//! instead of sharing output-directory state implicitly.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Kind of report a chart belongs to, one index page per kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Numeric distribution report
    Num,
    /// Categorical (string) distribution report
    Str,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Num => "num",
            ReportKind::Str => "str",
        }
    }
}

/// Accumulating report sink over one output directory.
///
/// Not safe for concurrent writers: callers sharing an output root must
/// serialize their calls.
#[derive(Debug, Clone)]
pub struct ReportSink {
    root: PathBuf,
}

impl ReportSink {
    /// Create a sink, ensuring the output root exists.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create report root {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a column's chart is written to. Re-profiling a column overwrites
    /// the same file.
    pub fn chart_path(&self, column: &str) -> PathBuf {
        self.root.join(format!("{}.png", column))
    }

    /// Path of the index page for a report kind.
    pub fn index_path(&self, kind: ReportKind) -> PathBuf {
        self.root.join(format!("{}.html", kind.as_str()))
    }

    /// Append an entry for a column's chart to the kind's index page,
    /// creating the page on first touch.
    ///
    /// Append-only and not deduplicated: registering the same column twice
    /// produces two entries.
    pub fn add_entry(&self, kind: ReportKind, column: &str) -> Result<()> {
        let path = self.index_path(kind);
        if !path.exists() {
            let header = format!(
                "<html><head><title>{kind} report</title></head><body>\n<h1>{kind} report</h1>\n",
                kind = kind.as_str()
            );
            fs::write(&path, header)
                .with_context(|| format!("Failed to create index page {}", path.display()))?;
        }

        let mut file = OpenOptions::new()
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open index page {}", path.display()))?;
        writeln!(
            file,
            r#"<p><a href="{column}.png">{column}</a></p>"#,
            column = column
        )
        .with_context(|| format!("Failed to append to index page {}", path.display()))?;

        Ok(())
    }
}
