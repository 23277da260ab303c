//! Per-file extraction of marker values.
//!
//! A file is read line by line; each line is matched against the configured
//! markers in priority order and the text after the first occurrence of the
//! winning marker is parsed as `f64`. Lines with no marker, and lines whose
//! trailing text does not parse as a number, contribute nothing — the whole
//! stripped remainder must parse, so trailing content after the number drops
//! the value.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use expstat_core::error::{Result, StatError};
use expstat_core::markers::MarkerSet;
use tracing::debug;

// ── Raw results ───────────────────────────────────────────────────────────────

/// Values extracted for one marker, in line order.
#[derive(Debug, Clone)]
pub struct MarkerValues {
    pub marker: String,
    pub values: Vec<f64>,
}

/// All values extracted from one file.
///
/// `markers` holds one entry per configured marker, in configured order,
/// including markers with zero matches (empty `values`).
#[derive(Debug, Clone)]
pub struct FileRawResults {
    pub path: PathBuf,
    pub markers: Vec<MarkerValues>,
}

// ── Extraction ────────────────────────────────────────────────────────────────

/// Scan one log file and collect the values for every configured marker.
///
/// Open and read errors propagate as [`StatError::FileRead`]; the scanner
/// only hands over paths it has discovered, so a failure here is unexpected
/// and must not silently become an empty result.
pub fn extract_file(path: &Path, markers: &MarkerSet) -> Result<FileRawResults> {
    let mut results = FileRawResults {
        path: path.to_path_buf(),
        markers: markers
            .iter()
            .map(|m| MarkerValues {
                marker: m.to_string(),
                values: Vec::new(),
            })
            .collect(),
    };

    let file = std::fs::File::open(path).map_err(|source| StatError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = std::io::BufReader::new(file);

    for line in reader.lines() {
        let line = line.map_err(|source| StatError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let Some((marker, rest)) = markers.match_line(&line) else {
            continue;
        };

        match rest.trim().parse::<f64>() {
            Ok(value) => {
                // match_line only returns configured markers, so the slot
                // always exists.
                if let Some(slot) = results.markers.iter_mut().find(|mv| mv.marker == marker) {
                    slot.values.push(value);
                }
            }
            Err(_) => {
                debug!(
                    "Unparsable value after {:?} in {}: {:?}",
                    marker,
                    path.display(),
                    rest.trim()
                );
            }
        }
    }

    Ok(results)
}
