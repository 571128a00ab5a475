use std::path::PathBuf;

use crate::data::model::Metric;

/// Where a run reads results from and where it writes charts.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Load-test summary CSV.
    pub input: PathBuf,
    /// Directory receiving one PNG per metric. Created if absent.
    pub output_dir: PathBuf,
    /// Image size in pixels (10×6 inches at 100 dpi by default).
    pub size: (u32, u32),
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("./load_test_results/summary.csv"),
            output_dir: PathBuf::from("./load_test_results/plots"),
            size: (1000, 600),
        }
    }
}

impl PlotConfig {
    /// Config rooted at `dir`: reads `dir/summary.csv`, writes `dir/plots/`.
    #[cfg(test)]
    pub fn in_dir(dir: &std::path::Path) -> Self {
        Self {
            input: dir.join("summary.csv"),
            output_dir: dir.join("plots"),
            ..Self::default()
        }
    }

    pub fn output_path(&self, metric: Metric) -> PathBuf {
        self.output_dir.join(metric.file_name())
    }
}
