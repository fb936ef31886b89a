//! Varprof: Dataset Profiling CLI
//!
//! Profiles a labeled dataset ahead of credit-scoring model development:
//! distribution charts per feature against the binary target, missing value
//! rates and category dominance flags.

mod cli;
mod profile;
mod report;
mod utils;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use profile::{
    count_within_windows, dump_missing_rates, load_dataset, max_bin_percentages,
    missing_rates_categorical, missing_rates_numeric, numeric_var_report, split_columns,
    str_var_report,
};
use report::{write_profile_export, ExportMetadata, ProfileExport, ProfileSummary, ReportSink};
use utils::{
    create_progress_bar, create_spinner, finish_with_success, print_banner, print_completion,
    print_config, print_info, print_step_header, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let started = Instant::now();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&cli.input, &cli.id, &cli.target, &cli.output, cli.truncate);

    print_step_header(1, "Loading dataset");
    let spinner = create_spinner("Reading input file...");
    let df = load_dataset(&cli.input, cli.infer_schema_length)?;
    finish_with_success(&spinner, &format!("Loaded {} rows", df.height()));

    print_step_header(2, "Classifying columns");
    let (str_vars, num_vars) = split_columns(&df, &cli.id, &cli.target)?;
    print_success(&format!(
        "{} numeric, {} categorical features",
        num_vars.len(),
        str_vars.len()
    ));

    let sink = ReportSink::new(&cli.output)?;
    let mut summary = ProfileSummary::new(df.height());
    summary.numeric_features = num_vars.len();
    summary.categorical_features = str_vars.len();

    print_step_header(3, "Profiling numeric features");
    let pb = create_progress_bar(num_vars.len() as u64, "  Rendering histograms");
    let mut numeric_profiles = Vec::with_capacity(num_vars.len());
    for var in &num_vars {
        let mut profiles = numeric_var_report(
            &df,
            std::slice::from_ref(var),
            &cli.target,
            &sink,
            cli.truncate,
        )?;
        numeric_profiles.append(&mut profiles);
        pb.inc(1);
    }
    finish_with_success(&pb, "Numeric charts written");
    summary.charts_written += numeric_profiles.len();

    print_step_header(4, "Profiling categorical features");
    let pb = create_progress_bar(str_vars.len() as u64, "  Rendering category charts");
    let mut categorical_profiles = Vec::with_capacity(str_vars.len());
    for var in &str_vars {
        let mut profiles = str_var_report(&df, std::slice::from_ref(var), &cli.target, &sink)?;
        categorical_profiles.append(&mut profiles);
        pb.inc(1);
    }
    finish_with_success(&pb, "Categorical charts written");
    summary.charts_written += categorical_profiles.len();

    print_step_header(5, "Missing value analysis");
    let mut rates = missing_rates_numeric(&df, &num_vars, None)?;
    rates.extend(missing_rates_categorical(&df, &str_vars, None)?);
    summary.add_missing_rates(&rates);
    if let Some(dump) = &cli.missing_dump {
        dump_missing_rates(&rates, dump)?;
        print_success(&format!("Missing rates dumped to {}", dump.display()));
    }
    print_success(&format!("{} features analyzed", rates.len()));

    print_step_header(6, "Category dominance check");
    for var in &str_vars {
        let shares = max_bin_percentages(&df, var)?;
        if let Some((_, max_share)) = shares.last() {
            if *max_share > cli.dominance_threshold {
                summary.dominant_category.push((var.clone(), *max_share));
            }
        }
    }
    print_success(&format!(
        "{} features dominated by a single category",
        summary.dominant_category.len()
    ));

    if let Some(elapsed_col) = &cli.elapsed_column {
        print_step_header(7, "Time-window counts");
        let counts = count_within_windows(&df, elapsed_col, &cli.windows)?;
        for (threshold, count) in &counts {
            print_info(&format!("<= {}: {} records", threshold, count));
        }
    }

    if cli.export_json {
        let metadata = ExportMetadata::new(
            &cli.input,
            &cli.id,
            &cli.target,
            df.height(),
            cli.truncate,
        );
        let export = ProfileExport {
            metadata,
            numeric: &numeric_profiles,
            categorical: &categorical_profiles,
        };
        let path = sink.root().join("profiles.json");
        write_profile_export(&export, &path)?;
        print_success(&format!("Profiles exported to {}", path.display()));
    }

    summary.display();
    print_info(&format!("Finished in {:.2?}", started.elapsed()));
    print_completion();

    Ok(())
}
