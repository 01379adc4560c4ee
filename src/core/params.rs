use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{OutputFormat, Padding, ThresholdStrategy};

/// Processing parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingParams {
    pub format: OutputFormat,
    /// Policy for deriving the foreground mask
    pub threshold: ThresholdStrategy,
    /// Background samples added around the cropped foreground
    pub padding: Padding,
    /// Target output height in pixels, keeping ratio; None keeps the cropped height
    pub height: Option<usize>,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            format: OutputFormat::Png,
            threshold: ThresholdStrategy::Otsu,
            padding: Padding::ZERO,
            height: None,
        }
    }
}

impl ProcessingParams {
    /// Load a parameter preset from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(Error::external)
    }
}
