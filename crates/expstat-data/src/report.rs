//! Append-mode report writing.
//!
//! Each run appends its blocks after whatever the output file already holds;
//! the file is never truncated. One block per (file, marker) pair:
//!
//! ```text
//! <file-path> - <marker>
//! Result: <mean*100>±<std*100>
//!
//! ```

use std::io::Write;
use std::path::Path;

use expstat_core::error::{Result, StatError};
use tracing::debug;

use crate::aggregator::Statistics;

/// Label prefixing the value line of every report block.
pub const RESULT_LABEL: &str = "Result";

/// Append all statistics blocks to `output`, creating the file if absent.
///
/// Returns the number of blocks written. Open and write failures propagate
/// as [`StatError::ReportWrite`]; the handle is scoped so it closes on all
/// exit paths.
pub fn write_report(stats: &Statistics, output: &Path) -> Result<usize> {
    let write_err = |source| StatError::ReportWrite {
        path: output.to_path_buf(),
        source,
    };

    let file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(output)
        .map_err(write_err)?;
    let mut writer = std::io::BufWriter::new(file);

    let mut blocks = 0usize;
    for file_stats in &stats.files {
        for ms in &file_stats.markers {
            writeln!(writer, "{} - {}", file_stats.path.display(), ms.marker)
                .map_err(write_err)?;
            writeln!(writer, "{}: {}", RESULT_LABEL, ms.summary.percent_pair())
                .map_err(write_err)?;
            writeln!(writer).map_err(write_err)?;
            blocks += 1;
        }
    }

    writer.flush().map_err(write_err)?;
    debug!("Appended {} report blocks to {}", blocks, output.display());
    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{FileStatistics, MarkerSummary};
    use expstat_core::stats::Summary;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sample_stats() -> Statistics {
        Statistics {
            files: vec![FileStatistics {
                path: PathBuf::from("run1.log"),
                markers: vec![MarkerSummary {
                    marker: "Acc:".to_string(),
                    summary: Summary::of(&[0.80, 0.90]).unwrap(),
                }],
            }],
        }
    }

    #[test]
    fn test_write_report_block_format() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("report.txt");

        let blocks = write_report(&sample_stats(), &out).unwrap();
        assert_eq!(blocks, 1);

        let content = std::fs::read_to_string(&out).unwrap();
        assert_eq!(content, "run1.log - Acc:\nResult: 85.0±5.0\n\n");
    }

    #[test]
    fn test_write_report_appends_never_truncates() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("report.txt");
        std::fs::write(&out, "pre-existing\n").unwrap();

        write_report(&sample_stats(), &out).unwrap();
        write_report(&sample_stats(), &out).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        assert!(content.starts_with("pre-existing\n"));
        // Two identical runs append two copies of the same block.
        assert_eq!(content.matches("run1.log - Acc:").count(), 2);
        assert_eq!(content.matches("Result: 85.0±5.0").count(), 2);
    }

    #[test]
    fn test_write_report_empty_statistics_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("report.txt");

        let blocks = write_report(&Statistics::default(), &out).unwrap();
        assert_eq!(blocks, 0);
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "");
    }

    #[test]
    fn test_write_report_multiple_blocks_blank_line_separated() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("report.txt");

        let stats = Statistics {
            files: vec![FileStatistics {
                path: PathBuf::from("run1.log"),
                markers: vec![
                    MarkerSummary {
                        marker: "Non Attacked Acc:".to_string(),
                        summary: Summary::of(&[0.80, 0.90]).unwrap(),
                    },
                    MarkerSummary {
                        marker: "Attacked Acc:".to_string(),
                        summary: Summary::of(&[0.50]).unwrap(),
                    },
                ],
            }],
        };

        write_report(&stats, &out).unwrap();
        let content = std::fs::read_to_string(&out).unwrap();
        assert_eq!(
            content,
            "run1.log - Non Attacked Acc:\nResult: 85.0±5.0\n\n\
             run1.log - Attacked Acc:\nResult: 50.0±0.0\n\n"
        );
    }

    #[test]
    fn test_write_report_unwritable_path_propagates() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be opened for append.
        let err = write_report(&sample_stats(), dir.path()).unwrap_err();
        assert!(matches!(err, StatError::ReportWrite { .. }));
    }
}
