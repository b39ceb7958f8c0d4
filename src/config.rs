//! Output configuration for submission files.

use serde::{Deserialize, Serialize};

/// Configuration for serializing a submission table.
///
/// The defaults reproduce the historical layout: a leading unnamed row-index
/// column followed by `Id` and `prediction`, floats in shortest form.
///
/// # Examples
///
/// ```
/// use submission::config::SubmissionConfig;
///
/// let config = SubmissionConfig::new()
///     .with_index(false)
///     .with_float_precision(4);
/// assert!(!config.write_index);
/// assert_eq!(config.float_precision, Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Emit the leading unnamed zero-based row-index column.
    pub write_index: bool,
    /// Fixed number of decimals for float predictions (`None` = shortest form).
    pub float_precision: Option<usize>,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            write_index: true,
            float_precision: None,
        }
    }
}

impl SubmissionConfig {
    /// Create a configuration with the default layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the leading row-index column.
    #[must_use]
    pub fn with_index(mut self, write_index: bool) -> Self {
        self.write_index = write_index;
        self
    }

    /// Render floats with a fixed number of decimals.
    #[must_use]
    pub fn with_float_precision(mut self, precision: usize) -> Self {
        self.float_precision = Some(precision);
        self
    }

    /// Header fields in output order.
    #[must_use]
    pub fn header(&self) -> Vec<&'static str> {
        let mut header = Vec::with_capacity(3);
        if self.write_index {
            header.push("");
        }
        header.push(crate::data::ID_COLUMN);
        header.push(crate::data::PREDICTION_COLUMN);
        header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_index_column() {
        let config = SubmissionConfig::default();
        assert!(config.write_index);
        assert_eq!(config.float_precision, None);
        assert_eq!(config.header(), vec!["", "Id", "prediction"]);
    }

    #[test]
    fn test_header_without_index() {
        let config = SubmissionConfig::new().with_index(false);
        assert_eq!(config.header(), vec!["Id", "prediction"]);
    }

    #[test]
    fn test_deserialize_partial_uses_defaults() {
        let config: SubmissionConfig =
            serde_json::from_str(r#"{"float_precision": 3}"#).expect("valid config");
        assert!(config.write_index);
        assert_eq!(config.float_precision, Some(3));

        let config: SubmissionConfig = serde_json::from_str("{}").expect("empty config");
        assert_eq!(config, SubmissionConfig::default());
    }

    #[test]
    fn test_deserialize_without_index() {
        let config: SubmissionConfig =
            serde_json::from_str(r#"{"write_index": false}"#).expect("valid config");
        assert!(!config.write_index);
    }
}
