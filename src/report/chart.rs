//! Chart rendering with plotters
//!
//! Two chart shapes: a weighted overlaid histogram for numeric profiles and
//! a dual-axis bar/line chart for categorical profiles. Rendering is a
//! boundary effect; all statistics are computed before these functions run.

use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use crate::profile::{CategoricalProfile, NumericProfile};

const CHART_SIZE: (u32, u32) = (900, 600);

/// Histogram bin count, matching the matplotlib default used by the report
/// reviewers' older tooling
const HIST_BINS: usize = 10;

/// Render the weighted overlaid bad/good histogram for a numeric profile.
///
/// Each partition's bars sum to 100% of that partition, so differently sized
/// groups stay visually comparable. An empty profile still produces a blank
/// chart file so the index entry has a target.
pub fn render_histogram(profile: &NumericProfile, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let rendered: Vec<f64> = profile
        .bad
        .values
        .iter()
        .chain(profile.good.values.iter())
        .copied()
        .filter(|v| v.is_finite())
        .collect();

    if rendered.is_empty() {
        root.present()?;
        return Ok(());
    }

    let lo = rendered.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = rendered.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if hi <= lo {
        hi = lo + 1.0;
    }

    let bad_bins = bin_weights(&profile.bad.values, profile.bad.weight_per_row, lo, hi);
    let good_bins = bin_weights(&profile.good.values, profile.good.weight_per_row, lo, hi);
    let y_max = bad_bins
        .iter()
        .chain(good_bins.iter())
        .copied()
        .fold(1.0f64, f64::max)
        * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption(profile.title(), ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(lo..hi, 0f64..y_max)?;
    chart
        .configure_mesh()
        .y_desc("% of dataset in bin")
        .draw()?;

    let bin_width = (hi - lo) / HIST_BINS as f64;
    for (bins, color, label) in [
        (&bad_bins, RED, "bad"),
        (&good_bins, BLUE, "good"),
    ] {
        let fill = color.mix(0.3).filled();
        chart
            .draw_series(bins.iter().enumerate().filter(|(_, w)| **w > 0.0).map(
                |(i, &w)| {
                    let x0 = lo + i as f64 * bin_width;
                    Rectangle::new([(x0, 0.0), (x0 + bin_width, w)], fill)
                },
            ))?
            .label(label)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.mix(0.3).filled())
            });
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    root.present()?;

    Ok(())
}

/// Render the dual-axis category chart: share-of-total bars on the primary
/// y-axis, bad rate as a line on the secondary y-axis.
pub fn render_category_chart(profile: &CategoricalProfile, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let n = profile.categories.len();
    if n == 0 {
        root.present()?;
        return Ok(());
    }

    let share_max = profile
        .categories
        .iter()
        .map(|(_, s)| s.share)
        .filter(|v| v.is_finite())
        .fold(0.01f64, f64::max)
        * 1.2;

    let labels: Vec<String> = profile
        .categories
        .iter()
        .map(|(name, _)| name.clone())
        .collect();

    let mut chart = ChartBuilder::on(&root)
        .caption(profile.title(), ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(60)
        .build_cartesian_2d(0f64..n as f64, 0f64..share_max)?
        .set_secondary_coord(0f64..n as f64, 0f64..1.05f64);

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n.min(20))
        .x_label_formatter(&|x| {
            labels
                .get(x.floor() as usize)
                .cloned()
                .unwrap_or_default()
        })
        .y_desc("percent (bar)")
        .draw()?;
    chart
        .configure_secondary_axes()
        .y_desc("bad rate (line)")
        .draw()?;

    chart.draw_series(
        profile
            .categories
            .iter()
            .enumerate()
            .filter(|(_, (_, s))| s.share.is_finite())
            .map(|(i, (_, s))| {
                Rectangle::new(
                    [(i as f64 + 0.1, 0.0), (i as f64 + 0.9, s.share)],
                    BLUE.filled(),
                )
            }),
    )?;

    // NaN bad rates (empty target) are skipped in the line only; the
    // computed statistics keep them
    chart.draw_secondary_series(LineSeries::new(
        profile
            .categories
            .iter()
            .enumerate()
            .filter(|(_, (_, s))| s.bad_rate.is_finite())
            .map(|(i, (_, s))| (i as f64 + 0.5, s.bad_rate)),
        &RED,
    ))?;

    root.present()?;
    Ok(())
}

fn bin_weights(values: &[f64], weight_per_row: f64, lo: f64, hi: f64) -> Vec<f64> {
    let mut bins = vec![0.0f64; HIST_BINS];
    if values.is_empty() {
        return bins;
    }
    let width = (hi - lo) / HIST_BINS as f64;
    for &v in values {
        if !v.is_finite() {
            continue;
        }
        let idx = (((v - lo) / width).floor() as usize).min(HIST_BINS - 1);
        bins[idx] += weight_per_row;
    }
    bins
}
