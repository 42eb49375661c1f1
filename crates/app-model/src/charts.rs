//! Chart series shapes
//!
//! Data consumed by the charting screens: an ordered label axis with one or
//! more numeric datasets. The upstream UI toolkit expressed series color as
//! an opacity-to-string function; here it is a serializable RGB triple
//! ([`ChartColor`]) resolved to an `rgba(...)` string on demand, so chart
//! data stays plain value data.
//!
//! `labels` should be the same length as every dataset's `data`. The shape
//! does not enforce this: a mismatched instance deserializes and serializes
//! untouched, and only [`ChartData::validate`] reports the mismatch. This
//! is a known gap carried over from the original contract, not a bug.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Chart validation error types
#[derive(Debug, Error)]
pub enum ChartError {
    /// A dataset's value count does not match the label axis
    #[error("dataset {index} has {data_len} values for {label_len} labels")]
    LengthMismatch {
        /// Position of the offending dataset
        index: usize,
        /// Number of axis labels
        label_len: usize,
        /// Number of values in the dataset
        data_len: usize,
    },
}

/// Result type for chart operations
pub type Result<T> = std::result::Result<T, ChartError>;

/// RGB series color, resolved to an `rgba(...)` string at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl ChartColor {
    /// Create a color from RGB channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        // get() keeps multi-byte input a parse failure, not a slice panic
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Resolve to an `rgba(r, g, b, opacity)` string
    ///
    /// Opacity is clamped to `0.0..=1.0`.
    pub fn resolve(&self, opacity: f64) -> String {
        let opacity = opacity.clamp(0.0, 1.0);
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, opacity)
    }

    /// Resolve at full opacity
    pub fn resolved(&self) -> String {
        self.resolve(1.0)
    }
}

/// A single ordered series of chart values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    /// Ordered numeric values, one per axis label
    pub data: Vec<f64>,
    /// Series color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ChartColor>,
    /// Line stroke width in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

impl ChartDataset {
    /// Create a dataset from its values
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data,
            color: None,
            stroke_width: None,
        }
    }

    /// Set the series color
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the stroke width
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }
}

/// Labeled chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Ordered axis labels
    pub labels: Vec<String>,
    /// One or more value series
    pub datasets: Vec<ChartDataset>,
}

impl ChartData {
    /// Create chart data from labels and datasets
    pub fn new(labels: Vec<String>, datasets: Vec<ChartDataset>) -> Self {
        Self { labels, datasets }
    }

    /// Check that every dataset is as long as the label axis
    ///
    /// The shape itself accepts mismatched lengths; run this at boundaries
    /// where a mismatch must be rejected rather than rendered.
    pub fn validate(&self) -> Result<()> {
        for (index, dataset) in self.datasets.iter().enumerate() {
            if dataset.data.len() != self.labels.len() {
                return Err(ChartError::LengthMismatch {
                    index,
                    label_len: self.labels.len(),
                    data_len: dataset.data.len(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_color_resolve() {
        let rose = ChartColor::new(255, 138, 155);
        assert_eq!(rose.resolve(0.5), "rgba(255, 138, 155, 0.5)");
        assert_eq!(rose.resolved(), "rgba(255, 138, 155, 1)");
        // Out-of-range opacity clamps
        assert_eq!(rose.resolve(2.0), "rgba(255, 138, 155, 1)");
        assert_eq!(rose.resolve(-1.0), "rgba(255, 138, 155, 0)");
    }

    #[test]
    fn test_chart_color_from_hex() {
        assert_eq!(
            ChartColor::from_hex("#FF8A9B"),
            Some(ChartColor::new(255, 138, 155))
        );
        assert_eq!(ChartColor::from_hex("FF8A9B"), None);
        assert_eq!(ChartColor::from_hex("#FFF"), None);
        assert_eq!(ChartColor::from_hex("#GG8A9B"), None);
        // Six bytes of UTF-8 but not six hex digits
        assert_eq!(ChartColor::from_hex("#日abc"), None);
        assert_eq!(ChartColor::from_hex("#ab日c"), None);
    }

    #[test]
    fn test_chart_data_valid_instance() {
        let chart = ChartData::new(
            vec!["Mon".to_string(), "Tue".to_string()],
            vec![ChartDataset::new(vec![1.0, 2.0])],
        );
        assert!(chart.validate().is_ok());
    }

    #[test]
    fn test_length_mismatch_accepted_structurally() {
        // Two labels, three values: the shape accepts it and round-trips it.
        let json = r#"{"labels":["Mon","Tue"],"datasets":[{"data":[1.0,2.0,3.0]}]}"#;
        let chart: ChartData = serde_json::from_str(json).unwrap();
        assert_eq!(chart.datasets[0].data.len(), 3);

        let back: ChartData = serde_json::from_str(&serde_json::to_string(&chart).unwrap()).unwrap();
        assert_eq!(back, chart);

        // Only the opt-in validator reports the gap.
        match chart.validate() {
            Err(ChartError::LengthMismatch {
                index,
                label_len,
                data_len,
            }) => {
                assert_eq!(index, 0);
                assert_eq!(label_len, 2);
                assert_eq!(data_len, 3);
            }
            other => panic!("expected length mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_dataset_wire_names_are_camel_case() {
        let dataset = ChartDataset::new(vec![4.2])
            .with_color(ChartColor::new(127, 179, 211))
            .with_stroke_width(2.0);
        let json = serde_json::to_string(&dataset).unwrap();
        assert!(json.contains("strokeWidth"));
        assert!(!json.contains("stroke_width"));
    }
}
