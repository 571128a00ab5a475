mod app;
mod color;
mod config;
mod data;
mod render;

use config::PlotConfig;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = PlotConfig::default();
    let report = app::run(&config)?;
    log::debug!(
        "rendered {} charts from {} rows of {}",
        report.charts.len(),
        report.rows,
        report.workloads.join(", ")
    );

    println!("Plots saved to {}/", config.output_dir.display());
    Ok(())
}
