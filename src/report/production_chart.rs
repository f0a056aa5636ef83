// ==========================================
// Apiary Monitor - Production chart renderer
// ==========================================
// Presentation helper, outside the transactional core. Input is
// the full production history; output is one SVG line chart,
// one series per hive code. The filesystem write is not
// transactional with the database read that produced it.
// ==========================================

use crate::repository::production_repo::ProductionSample;
use anyhow::{anyhow, Result};
use chrono::{Duration, NaiveDate};
use plotters::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

const CHART_WIDTH: u32 = 1024;
const CHART_HEIGHT: u32 = 640;

/// Renders the honey production chart.
pub struct ProductionChartRenderer {
    output_path: PathBuf,
}

impl ProductionChartRenderer {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    /// Render one line series per hive (x = collection date, y = honey kg)
    /// to the configured path, overwriting any prior file. The parent
    /// directory is created if absent.
    ///
    /// Callers are expected to skip rendering for an empty history; an
    /// empty input here is rejected rather than producing an empty chart.
    pub fn render(&self, samples: &[ProductionSample]) -> Result<()> {
        if samples.is_empty() {
            return Err(anyhow!("no production samples to render"));
        }

        if let Some(parent) = self.output_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let (date_range, quantity_range) = axis_ranges(samples);
        let series = group_by_hive(samples);

        let root = SVGBackend::new(&self.output_path, (CHART_WIDTH, CHART_HEIGHT))
            .into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Honey production by hive", ("sans-serif", 28))
            .margin(12)
            .x_label_area_size(44)
            .y_label_area_size(56)
            .build_cartesian_2d(date_range, quantity_range)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .x_desc("Collection date")
            .y_desc("Honey quantity (kg)")
            .x_label_formatter(&|d: &NaiveDate| d.format("%Y-%m-%d").to_string())
            .draw()
            .map_err(chart_err)?;

        for (idx, (code, points)) in series.iter().enumerate() {
            let style = Palette99::pick(idx).stroke_width(2);
            chart
                .draw_series(LineSeries::new(points.iter().copied(), style))
                .map_err(chart_err)?
                .label(code.clone())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], style));
        }

        chart
            .configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .draw()
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
        Ok(())
    }
}

fn chart_err<E: std::fmt::Display>(e: E) -> anyhow::Error {
    anyhow!("chart rendering failed: {e}")
}

/// Group the flat history into per-hive series, keyed by hive code.
/// BTreeMap keeps series and legend order deterministic.
fn group_by_hive(samples: &[ProductionSample]) -> BTreeMap<String, Vec<(NaiveDate, f64)>> {
    let mut series: BTreeMap<String, Vec<(NaiveDate, f64)>> = BTreeMap::new();
    for sample in samples {
        series
            .entry(sample.hive_code.clone())
            .or_default()
            .push((sample.collection_date, sample.honey_quantity));
    }
    series
}

/// Axis ranges covering all samples; degenerate ranges are widened so the
/// coordinate system stays valid for a single date or all-zero quantities.
fn axis_ranges(
    samples: &[ProductionSample],
) -> (std::ops::Range<NaiveDate>, std::ops::Range<f64>) {
    let mut min_date = samples[0].collection_date;
    let mut max_date = samples[0].collection_date;
    let mut max_qty = 0f64;

    for sample in samples {
        min_date = min_date.min(sample.collection_date);
        max_date = max_date.max(sample.collection_date);
        max_qty = max_qty.max(sample.honey_quantity);
    }

    if min_date == max_date {
        max_date += Duration::days(1);
    }
    if max_qty <= 0.0 {
        max_qty = 1.0;
    }

    (min_date..max_date, 0.0..max_qty * 1.1)
}
