//! Summary statistics over extracted result values.

/// Mean and population standard deviation of one value sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub std_dev: f64,
}

impl Summary {
    /// Summarise a sequence of values.
    ///
    /// Returns `None` for an empty slice. The standard deviation is the
    /// *population* standard deviation (divisor N, not N−1).
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Some(Self {
            mean,
            std_dev: variance.sqrt(),
        })
    }

    /// Render the summary as percentages, one decimal place, joined with `±`.
    ///
    /// Values are multiplied by 100 and formatted with `{:.1}`, i.e. Rust's
    /// default round-half-to-even float formatting. Exact behaviour at the
    /// half-cent boundary follows that rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use expstat_core::stats::Summary;
    ///
    /// let s = Summary::of(&[0.80, 0.90]).unwrap();
    /// assert_eq!(s.percent_pair(), "85.0±5.0");
    /// ```
    pub fn percent_pair(&self) -> String {
        format!("{:.1}±{:.1}", self.mean * 100.0, self.std_dev * 100.0)
    }
}
