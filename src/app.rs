use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::color::ColorMap;
use crate::config::PlotConfig;
use crate::data::group::{group_by_workload, workload_names};
use crate::data::loader::load_csv;
use crate::data::model::Metric;
use crate::render::chart::{build_series, render_chart};
use crate::render::ensure_output_dir;

// ---------------------------------------------------------------------------
// Run: load → group → colour → render
// ---------------------------------------------------------------------------

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotReport {
    pub workloads: Vec<String>,
    pub rows: usize,
    pub charts: Vec<PathBuf>,
}

/// Render one chart per [`Metric`] from the configured summary file.
///
/// The input is loaded before the output directory is touched, so a missing
/// or malformed file leaves no plots directory behind.
pub fn run(config: &PlotConfig) -> Result<PlotReport> {
    let table = load_csv(&config.input)
        .with_context(|| format!("loading {}", config.input.display()))?;

    if table.is_empty() {
        log::warn!("{} has no data rows, charts will be empty", config.input.display());
    }

    let groups = group_by_workload(&table);
    let names = workload_names(&groups);
    log::info!(
        "{} rows across {} workloads: {}",
        table.len(),
        names.len(),
        names.join(", ")
    );

    let colors = ColorMap::new(names.as_slice());

    ensure_output_dir(&config.output_dir)?;

    let mut charts = Vec::with_capacity(Metric::ALL.len());
    for metric in Metric::ALL {
        let path = config.output_path(metric);
        let series = build_series(&groups, &colors, metric);
        render_chart(&path, config.size, metric, &series)?;
        charts.push(path);
    }

    Ok(PlotReport {
        workloads: names.iter().map(|n| n.to_string()).collect(),
        rows: table.len(),
        charts,
    })
}
