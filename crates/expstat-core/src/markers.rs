//! Ordered marker matching.
//!
//! A marker is a fixed substring whose presence in a line identifies the line
//! as carrying a result for a particular named metric. Markers are kept as an
//! explicit ordered list and tested with a linear scan: the first configured
//! marker that occurs anywhere in a line claims that line, so a line can
//! never be counted under two markers.

use crate::error::{Result, StatError};

/// An immutable, ordered set of unique marker strings.
///
/// Order is extraction priority and is fixed at construction.
#[derive(Debug, Clone)]
pub struct MarkerSet {
    markers: Vec<String>,
}

impl MarkerSet {
    /// Build a marker set from an ordered list of marker strings.
    ///
    /// Fails with [`StatError::Config`] when the list is empty or contains
    /// a duplicate or empty marker.
    pub fn new(markers: Vec<String>) -> Result<Self> {
        if markers.is_empty() {
            return Err(StatError::Config("at least one marker is required".to_string()));
        }
        for (i, marker) in markers.iter().enumerate() {
            if marker.is_empty() {
                return Err(StatError::Config("empty marker string".to_string()));
            }
            if markers[..i].contains(marker) {
                return Err(StatError::Config(format!("duplicate marker: {marker:?}")));
            }
        }
        Ok(Self { markers })
    }

    /// Number of configured markers.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Iterate over the markers in configured (priority) order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(String::as_str)
    }

    /// Match `line` against the markers in configured order.
    ///
    /// Returns the first marker that is a substring of the line, together
    /// with the text following the *first* occurrence of that marker, up to
    /// the end of the line. Returns `None` when no marker occurs in the line.
    pub fn match_line<'a>(&self, line: &'a str) -> Option<(&str, &'a str)> {
        for marker in &self.markers {
            if let Some(pos) = line.find(marker.as_str()) {
                return Some((marker.as_str(), &line[pos + marker.len()..]));
            }
        }
        None
    }
}
