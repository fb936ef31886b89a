//! Profiling run summary table

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Missing-rate level above which a feature is called out in the summary
const HIGH_MISSING_THRESHOLD: f64 = 0.5;

/// Summary of one profiling run
#[derive(Debug, Default)]
pub struct ProfileSummary {
    pub rows: usize,
    pub numeric_features: usize,
    pub categorical_features: usize,
    pub charts_written: usize,
    pub high_missing: Vec<(String, f64)>,
    pub dominant_category: Vec<(String, f64)>,
}

impl ProfileSummary {
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    /// Record the missing rates, keeping only the ones worth flagging.
    pub fn add_missing_rates(&mut self, rates: &[(String, f64)]) {
        for (name, rate) in rates {
            if *rate > HIGH_MISSING_THRESHOLD {
                self.high_missing.push((name.clone(), *rate));
            }
        }
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("PROFILE SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("📁 Rows"), Cell::new(self.rows)]);
        table.add_row(vec![
            Cell::new("🔢 Numeric features"),
            Cell::new(self.numeric_features),
        ]);
        table.add_row(vec![
            Cell::new("🔤 Categorical features"),
            Cell::new(self.categorical_features),
        ]);
        table.add_row(vec![
            Cell::new("📊 Charts written"),
            Cell::new(self.charts_written)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new("🕳️  High-missing features"),
            Cell::new(self.high_missing.len()).fg(if self.high_missing.is_empty() {
                Color::White
            } else {
                Color::Red
            }),
        ]);
        table.add_row(vec![
            Cell::new("⚠️  Dominant-category features"),
            Cell::new(self.dominant_category.len()).fg(if self.dominant_category.is_empty() {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);

        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if !self.high_missing.is_empty() {
            println!();
            println!(
                "      {} {}:",
                style("High missing rate").yellow(),
                style(format!("({})", self.high_missing.len())).dim()
            );
            for (feature, rate) in &self.high_missing {
                println!(
                    "        {} {} ({:.1}% missing)",
                    style("•").dim(),
                    feature,
                    rate * 100.0
                );
            }
        }

        if !self.dominant_category.is_empty() {
            println!();
            println!(
                "      {} {}:",
                style("Dominant single category").yellow(),
                style(format!("({})", self.dominant_category.len())).dim()
            );
            for (feature, share) in &self.dominant_category {
                println!(
                    "        {} {} (max bin {:.1}%)",
                    style("•").dim(),
                    feature,
                    share * 100.0
                );
            }
        }
    }
}
