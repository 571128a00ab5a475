use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// One summary row, in the column layout the plotter reads.
#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    #[serde(rename = "Workload")]
    workload: &'a str,
    #[serde(rename = "Threads")]
    threads: u32,
    #[serde(rename = "AvgThroughput")]
    avg_throughput: f64,
    #[serde(rename = "AvgResponseTime")]
    avg_response_time: f64,
}

/// Shape of a workload's scaling curve.
struct Profile {
    name: &'static str,
    /// Requests/sec a single client achieves.
    base_rps: f64,
    /// Client count at which throughput reaches half of `peak_rps`.
    half_saturation: f64,
    peak_rps: f64,
    /// Latency floor in ms.
    base_latency_ms: f64,
}

const PROFILES: [Profile; 4] = [
    Profile { name: "PUT_ALL", base_rps: 180.0, half_saturation: 6.0, peak_rps: 1400.0, base_latency_ms: 5.5 },
    Profile { name: "GET_ALL", base_rps: 240.0, half_saturation: 10.0, peak_rps: 2600.0, base_latency_ms: 4.1 },
    Profile { name: "GET_POPULAR", base_rps: 900.0, half_saturation: 24.0, peak_rps: 21000.0, base_latency_ms: 1.1 },
    Profile { name: "MIXED", base_rps: 260.0, half_saturation: 12.0, peak_rps: 3100.0, base_latency_ms: 3.8 },
];

const THREAD_COUNTS: [u32; 7] = [1, 2, 4, 8, 16, 32, 64];

impl Profile {
    /// Saturating throughput: linear at first, flattening towards `peak_rps`.
    fn throughput(&self, threads: u32) -> f64 {
        let t = threads as f64;
        let saturating = self.peak_rps * t / (t + self.half_saturation);
        saturating.max(self.base_rps.min(self.peak_rps))
    }

    /// Little's law: each client has one request in flight.
    fn response_time(&self, threads: u32) -> f64 {
        let t = threads as f64;
        (t * 1000.0 / self.throughput(threads)).max(self.base_latency_ms)
    }
}

fn write_summary(path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("opening {} for writing", path.display()))?;

    let mut rows = 0;
    for profile in &PROFILES {
        for &threads in &THREAD_COUNTS {
            let row = SummaryRow {
                workload: profile.name,
                threads,
                avg_throughput: (profile.throughput(threads) * 100.0).round() / 100.0,
                avg_response_time: (profile.response_time(threads) * 1000.0).round() / 1000.0,
            };
            log::debug!("{row:?}");
            writer.serialize(&row).context("writing summary row")?;
            rows += 1;
        }
    }
    writer.flush().context("flushing summary")?;

    Ok(rows)
}

fn main() -> Result<()> {
    env_logger::init();

    let output_path = Path::new("./load_test_results/summary.csv");
    let rows = write_summary(output_path)?;

    println!(
        "Wrote {rows} rows ({} workloads x {} thread counts) to {}",
        PROFILES.len(),
        THREAD_COUNTS.len(),
        output_path.display()
    );
    Ok(())
}
