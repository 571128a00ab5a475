/// Chart rendering: styling constants, series preparation and PNG output.
pub mod chart;
pub mod style;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::data::model::Metric;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{metric} {axis} values span too wide a range to plot")]
    AxisRange { metric: Metric, axis: &'static str },

    #[error("failed to draw {metric} chart to {}: {message}", path.display())]
    Draw {
        metric: Metric,
        path: PathBuf,
        message: String,
    },
}

/// Create the plots directory and any missing parents. Existing files inside
/// are left alone.
pub fn ensure_output_dir(dir: &Path) -> Result<(), RenderError> {
    std::fs::create_dir_all(dir).map_err(|source| RenderError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}
