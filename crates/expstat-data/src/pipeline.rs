//! The end-to-end statistics pipeline.
//!
//! Chains the four stages sequentially: traversal, extraction, aggregation,
//! reporting. All data is transient, held only for the duration of one call;
//! nothing persists between runs except what is appended to the output file.

use std::path::PathBuf;

use expstat_core::error::Result;
use expstat_core::markers::MarkerSet;
use tracing::info;

use crate::aggregator::{summarize_all, Statistics};
use crate::extractor::{extract_file, FileRawResults};
use crate::report::write_report;
use crate::scanner::find_log_files;

/// Outcome of one report run, for logging at the entry point.
#[derive(Debug, Clone, Copy)]
pub struct ReportOutcome {
    /// Number of `.log` files scanned.
    pub files_scanned: usize,
    /// Number of (file, marker) blocks appended to the report.
    pub blocks_written: usize,
}

/// Aggregates experiment results under a root directory and appends a
/// formatted report.
///
/// Immutable once constructed; the three fields are the entire
/// configuration surface.
#[derive(Debug, Clone)]
pub struct ExperimentStatistics {
    root: PathBuf,
    markers: MarkerSet,
    output: PathBuf,
}

impl ExperimentStatistics {
    pub fn new(root: PathBuf, markers: MarkerSet, output: PathBuf) -> Self {
        Self {
            root,
            markers,
            output,
        }
    }

    /// Traversal + extraction: one raw-results entry per discovered file,
    /// in sorted path order.
    pub fn collect_raw_results(&self) -> Result<Vec<FileRawResults>> {
        let files = find_log_files(&self.root)?;
        files
            .iter()
            .map(|path| extract_file(path, &self.markers))
            .collect()
    }

    /// Traversal + extraction + aggregation.
    pub fn calculate_statistics(&self) -> Result<Statistics> {
        Ok(summarize_all(&self.collect_raw_results()?))
    }

    /// The full pipeline: compute statistics and append them to the
    /// output file.
    pub fn write_statistics(&self) -> Result<ReportOutcome> {
        let stats = self.calculate_statistics()?;
        let blocks_written = write_report(&stats, &self.output)?;
        info!(
            "Scanned {} files under {}, appended {} blocks to {}",
            stats.files.len(),
            self.root.display(),
            blocks_written,
            self.output.display()
        );
        Ok(ReportOutcome {
            files_scanned: stats.files.len(),
            blocks_written,
        })
    }
}
