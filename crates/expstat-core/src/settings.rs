use clap::Parser;
use std::path::PathBuf;

use crate::error::Result;
use crate::markers::MarkerSet;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Aggregate numeric experiment results from log files
#[derive(Parser, Debug, Clone)]
#[command(
    name = "expstat",
    about = "Aggregate numeric experiment results scattered across .log files",
    version
)]
pub struct Settings {
    /// Root directory to scan recursively for .log files
    pub root: PathBuf,

    /// Marker string that identifies a result line; repeatable, command-line
    /// order sets extraction priority
    #[arg(long = "marker", value_name = "STRING", required = true)]
    pub markers: Vec<String>,

    /// Report file; results are appended, existing content is kept
    #[arg(long, default_value = "statistics_output.txt")]
    pub output: PathBuf,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,
}

impl Settings {
    /// Validate the marker list and build the ordered [`MarkerSet`].
    ///
    /// Fails when a marker is duplicated or empty; clap already enforces
    /// that at least one `--marker` is present on the command line.
    pub fn marker_set(&self) -> Result<MarkerSet> {
        MarkerSet::new(self.markers.clone())
    }
}
