//! Threshold routines that turn a grayscale image into a `{0, 255}`
//! foreground mask.
use ndarray::{Array2, ArrayView2};
use tracing::debug;

use crate::types::ThresholdStrategy;

/// Cutoff used by `ThresholdStrategy::Fixed`.
pub const DEFAULT_FIXED_CUTOFF: u8 = 170;

/// Derive a binary mask from `image` with the given policy.
/// Foreground samples are 255, background 0.
pub fn binarize(image: ArrayView2<'_, u8>, strategy: ThresholdStrategy) -> Array2<u8> {
    let cutoff = match strategy {
        ThresholdStrategy::Otsu => otsu_cutoff(image),
        ThresholdStrategy::Fixed => DEFAULT_FIXED_CUTOFF,
    };
    debug!("Binarizing with {} cutoff {}", strategy, cutoff);
    fixed_threshold(image, cutoff)
}

/// Mark every sample strictly above `cutoff` as foreground (255).
pub fn fixed_threshold(image: ArrayView2<'_, u8>, cutoff: u8) -> Array2<u8> {
    image.mapv(|v| if v > cutoff { 255 } else { 0 })
}

/// Otsu's method: pick the cutoff that maximizes the between-class
/// variance of the background/foreground split over a 256-bin histogram.
pub fn otsu_cutoff(image: ArrayView2<'_, u8>) -> u8 {
    let mut histogram = [0u64; 256];
    for &v in image.iter() {
        histogram[v as usize] += 1;
    }

    let total = image.len() as u64;
    if total == 0 {
        return 0;
    }

    let mut sum_total = 0.0_f64;
    for (i, &count) in histogram.iter().enumerate() {
        sum_total += i as f64 * count as f64;
    }

    let mut sum_background = 0.0_f64;
    let mut weight_background = 0u64;
    let mut max_variance = 0.0_f64;
    let mut best_cutoff = 0u8;

    for (t, &count) in histogram.iter().enumerate() {
        weight_background += count;
        if weight_background == 0 {
            continue;
        }
        let weight_foreground = total - weight_background;
        if weight_foreground == 0 {
            break;
        }

        sum_background += t as f64 * count as f64;
        let mean_background = sum_background / weight_background as f64;
        let mean_foreground = (sum_total - sum_background) / weight_foreground as f64;

        let between_variance = weight_background as f64
            * weight_foreground as f64
            * (mean_background - mean_foreground).powi(2);

        if between_variance > max_variance {
            max_variance = between_variance;
            best_cutoff = t as u8;
        }
    }

    best_cutoff
}
