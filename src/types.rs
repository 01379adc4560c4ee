//! Shared types used across DOCPREP.
//! Includes the per-side `Padding` spec, the `MaskSource` discriminant,
//! `ThresholdStrategy`, `BoundingBox`, and `OutputFormat`.
use std::str::FromStr;

use clap::ValueEnum;
use ndarray::ArrayViewD;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Threshold policy used to derive a binary foreground mask from a
/// grayscale image.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum ThresholdStrategy {
    /// Otsu's method: pick the cutoff maximizing between-class variance.
    Otsu,
    /// Fixed cutoff at `DEFAULT_FIXED_CUTOFF`.
    Fixed,
}

impl std::fmt::Display for ThresholdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThresholdStrategy::Otsu => write!(f, "Otsu"),
            ThresholdStrategy::Fixed => write!(f, "Fixed"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    Png,
    Jpeg, // Lossy, preview only
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "Png"),
            OutputFormat::Jpeg => write!(f, "Jpeg"),
        }
    }
}

/// Where the foreground mask for cropping comes from.
///
/// The crop routine branches on this exactly once, at entry.
#[derive(Debug, Clone)]
pub enum MaskSource<'a> {
    /// Caller-supplied mask of the same shape as the image; any non-zero
    /// sample counts as foreground.
    Provided(ArrayViewD<'a, u8>),
    /// Derive a `{0, 255}` mask from the image itself.
    Derive(ThresholdStrategy),
}

impl Default for MaskSource<'_> {
    fn default() -> Self {
        MaskSource::Derive(ThresholdStrategy::Otsu)
    }
}

/// Background samples to add on each side of the cropped foreground.
///
/// Any accepted representation is normalized into this fixed 4-field
/// form before the crop algorithm runs; everything else is rejected as
/// `Error::InvalidPadding` at construction time.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Padding {
    pub left: usize,
    pub right: usize,
    pub top: usize,
    pub bottom: usize,
}

impl Padding {
    pub const ZERO: Padding = Padding {
        left: 0,
        right: 0,
        top: 0,
        bottom: 0,
    };

    pub fn new(left: usize, right: usize, top: usize, bottom: usize) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Same padding on all four sides.
    pub fn uniform(pad: usize) -> Self {
        Self::new(pad, pad, pad, pad)
    }

    /// Exactly 4 non-negative entries, ordered left, right, top, bottom.
    pub fn from_slice(values: &[i64]) -> crate::Result<Self> {
        let [left, right, top, bottom] = values else {
            return Err(Error::InvalidPadding(format!(
                "expected 4 entries, got {}",
                values.len()
            )));
        };
        for &v in values {
            if v < 0 {
                return Err(Error::InvalidPadding(format!("negative entry {v}")));
            }
        }
        Ok(Self::new(
            *left as usize,
            *right as usize,
            *top as usize,
            *bottom as usize,
        ))
    }

    pub fn horizontal(&self) -> usize {
        self.left + self.right
    }

    pub fn vertical(&self) -> usize {
        self.top + self.bottom
    }
}

impl From<usize> for Padding {
    fn from(pad: usize) -> Self {
        Padding::uniform(pad)
    }
}

impl FromStr for Padding {
    type Err = Error;

    /// Parses either a single non-negative integer ("8") or four
    /// comma-separated entries ("8,8,4,4", ordered left, right, top, bottom).
    fn from_str(s: &str) -> crate::Result<Self> {
        if !s.contains(',') {
            let v: i64 = s
                .trim()
                .parse()
                .map_err(|_| Error::InvalidPadding(s.to_string()))?;
            if v < 0 {
                return Err(Error::InvalidPadding(s.to_string()));
            }
            return Ok(Padding::uniform(v as usize));
        }
        let mut values = Vec::new();
        for part in s.split(',') {
            let v: i64 = part
                .trim()
                .parse()
                .map_err(|_| Error::InvalidPadding(s.to_string()))?;
            values.push(v);
        }
        Padding::from_slice(&values)
    }
}

/// Tight axis-aligned bounds of the foreground; end indices exclusive.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct BoundingBox {
    pub row_start: usize,
    pub row_end: usize,
    pub col_start: usize,
    pub col_end: usize,
}

impl BoundingBox {
    pub fn height(&self) -> usize {
        self.row_end - self.row_start
    }

    pub fn width(&self) -> usize {
        self.col_end - self.col_start
    }
}
