//! Aggregation of raw extraction results into summary statistics.

use std::path::PathBuf;

use expstat_core::stats::Summary;

use crate::extractor::FileRawResults;

// ── Statistics ────────────────────────────────────────────────────────────────

/// Summary for one (file, marker) pair.
#[derive(Debug, Clone)]
pub struct MarkerSummary {
    pub marker: String,
    pub summary: Summary,
}

/// Per-marker summaries for one file.
///
/// `markers` follows configured marker order, filtered to markers that had
/// at least one parsed value; it may be empty.
#[derive(Debug, Clone)]
pub struct FileStatistics {
    pub path: PathBuf,
    pub markers: Vec<MarkerSummary>,
}

/// Statistics for all scanned files, in traversal order.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    pub files: Vec<FileStatistics>,
}

impl Statistics {
    /// Total number of (file, marker) summaries across all files.
    pub fn block_count(&self) -> usize {
        self.files.iter().map(|f| f.markers.len()).sum()
    }
}

// ── Aggregation ───────────────────────────────────────────────────────────────

/// Summarise one file's raw results.
///
/// Markers with an empty value sequence are dropped here; they never appear
/// in the output with a placeholder pair.
pub fn summarize_file(raw: &FileRawResults) -> FileStatistics {
    FileStatistics {
        path: raw.path.clone(),
        markers: raw
            .markers
            .iter()
            .filter_map(|mv| {
                Summary::of(&mv.values).map(|summary| MarkerSummary {
                    marker: mv.marker.clone(),
                    summary,
                })
            })
            .collect(),
    }
}

/// Summarise all files, preserving file order.
pub fn summarize_all(raw: &[FileRawResults]) -> Statistics {
    Statistics {
        files: raw.iter().map(summarize_file).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::MarkerValues;
    use std::path::Path;

    fn raw(path: &str, markers: &[(&str, &[f64])]) -> FileRawResults {
        FileRawResults {
            path: Path::new(path).to_path_buf(),
            markers: markers
                .iter()
                .map(|(m, vs)| MarkerValues {
                    marker: m.to_string(),
                    values: vs.to_vec(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_summarize_file_basic() {
        let stats = summarize_file(&raw("run1.log", &[("Acc:", &[0.80, 0.90])]));
        assert_eq!(stats.markers.len(), 1);
        assert_eq!(stats.markers[0].marker, "Acc:");
        assert!((stats.markers[0].summary.mean - 0.85).abs() < 1e-12);
        assert!((stats.markers[0].summary.std_dev - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_summarize_file_drops_empty_markers() {
        let stats = summarize_file(&raw(
            "run1.log",
            &[("Acc:", &[0.5]), ("Loss:", &[])],
        ));
        // A zero-match marker is absent, never present as (0, 0).
        assert_eq!(stats.markers.len(), 1);
        assert_eq!(stats.markers[0].marker, "Acc:");
    }

    #[test]
    fn test_summarize_file_all_empty_yields_empty_entry() {
        let stats = summarize_file(&raw("run1.log", &[("Acc:", &[]), ("Loss:", &[])]));
        assert!(stats.markers.is_empty());
        assert_eq!(stats.path, Path::new("run1.log"));
    }

    #[test]
    fn test_summarize_file_preserves_marker_order() {
        let stats = summarize_file(&raw(
            "run1.log",
            &[("A:", &[1.0]), ("B:", &[]), ("C:", &[2.0])],
        ));
        let order: Vec<&str> = stats.markers.iter().map(|ms| ms.marker.as_str()).collect();
        assert_eq!(order, vec!["A:", "C:"]);
    }

    #[test]
    fn test_summarize_all_preserves_file_order() {
        let stats = summarize_all(&[
            raw("a.log", &[("M:", &[1.0])]),
            raw("b.log", &[("M:", &[2.0])]),
        ]);
        let order: Vec<&Path> = stats.files.iter().map(|f| f.path.as_path()).collect();
        assert_eq!(order, vec![Path::new("a.log"), Path::new("b.log")]);
        assert_eq!(stats.block_count(), 2);
    }

    #[test]
    fn test_identical_values_give_zero_std_dev() {
        let stats = summarize_file(&raw("run1.log", &[("M:", &[0.7, 0.7, 0.7])]));
        assert!((stats.markers[0].summary.mean - 0.7).abs() < 1e-12);
        assert_eq!(stats.markers[0].summary.std_dev, 0.0);
    }
}
