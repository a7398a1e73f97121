//! Analysis thresholds and report settings.
//!
//! Every field has a documented default, so a TOML file only needs to name the
//! values it overrides:
//!
//! ```toml
//! missing_threshold = 0.4
//! top_k = 5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EdaError;
use crate::io::LoadOptions;

/// Thresholds for the ratio-based quality flags.
///
/// Values outside `[0, 1]` are accepted; they simply make a flag always or
/// never fire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityThresholds {
    /// A column is "high missing" when its null share is strictly above this.
    /// Default: 0.5
    pub missing_threshold: f64,
    /// A text column is "high cardinality" when distinct/rows is strictly above this.
    /// Default: 0.5
    pub cardinality_threshold: f64,
    /// A numeric column has "many zeros" when its zero share is strictly above this.
    /// Default: 0.3
    pub zero_threshold: f64,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            missing_threshold: 0.5,
            cardinality_threshold: 0.5,
            zero_threshold: 0.3,
        }
    }
}

/// Full configuration for an analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdaConfig {
    #[serde(flatten)]
    pub thresholds: QualityThresholds,
    /// Columns whose null share is at or above this are "problematic".
    /// Default: 0.1
    pub min_missing_share: f64,
    /// Number of top category values to report per column.
    /// Default: 10
    pub top_k: usize,
    /// Maximum number of numeric columns to draw histograms for.
    /// Default: 20
    pub max_hist_columns: usize,
    /// Maximum number of text columns to list top categories for.
    /// Default: 5
    pub max_category_columns: usize,
    /// Field delimiter of the input file.
    /// Default: ','
    pub delimiter: char,
    /// Read date and timestamp text as datetime columns.
    /// Default: false
    pub parse_dates: bool,
}

impl Default for EdaConfig {
    fn default() -> Self {
        Self {
            thresholds: QualityThresholds::default(),
            min_missing_share: 0.1,
            top_k: 10,
            max_hist_columns: 20,
            max_category_columns: 5,
            delimiter: ',',
            parse_dates: false,
        }
    }
}

impl EdaConfig {
    /// Parse a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, EdaError> {
        let config: EdaConfig = toml::from_str(content)?;
        if !config.delimiter.is_ascii() {
            return Err(EdaError::Config(format!(
                "delimiter must be a single ASCII character, got '{}'",
                config.delimiter
            )));
        }
        Ok(config)
    }

    /// Load a configuration file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, EdaError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> u8 {
        // from_toml_str rejects non-ASCII delimiters; fall back to ',' for hand-built configs
        u8::try_from(self.delimiter).unwrap_or(b',')
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            delimiter: self.delimiter_byte(),
            parse_dates: self.parse_dates,
        }
    }
}
