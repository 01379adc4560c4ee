//! High-level, ergonomic library API: process grayscale images to files or
//! in-memory buffers, plus batch helpers for directories. Prefer these
//! entrypoints over the low-level processing modules when embedding DOCPREP.
use std::path::{Path, PathBuf};

use ndarray::Array2;
use tracing::{info, warn};

use crate::core::params::ProcessingParams;
use crate::core::processing::crop::crop_boundary_and_padding;
use crate::core::processing::resize::resize_height_keep_ratio;
use crate::error::{Error, Result};
use crate::types::{MaskSource, OutputFormat};

/// Result of in-memory processing
#[derive(Debug, Clone)]
pub struct ProcessedImage {
    pub width: usize,
    pub height: usize,
    /// Row-major grayscale samples
    pub gray: Vec<u8>,
}

/// Load an image from `path` and convert it to an 8-bit grayscale array,
/// row-major, addressed `(row, col)`.
pub fn load_gray_image(path: &Path) -> Result<Array2<u8>> {
    let gray = image::open(path)?.to_luma8();
    let (width, height) = gray.dimensions();
    Array2::from_shape_vec((height as usize, width as usize), gray.into_raw())
        .map_err(Error::external)
}

/// Crop, pad, and optionally resize an in-memory grayscale array.
pub fn process_gray_to_buffer(
    image: &Array2<u8>,
    params: &ProcessingParams,
) -> Result<ProcessedImage> {
    let cropped = crop_boundary_and_padding(
        image.view().into_dyn(),
        params.padding,
        MaskSource::Derive(params.threshold),
    )?;

    let final_im = match params.height {
        Some(height) => resize_height_keep_ratio(cropped.view(), height)?,
        None => cropped,
    };

    let (rows, cols) = final_im.dim();
    Ok(ProcessedImage {
        width: cols,
        height: rows,
        gray: final_im.into_raw_vec(),
    })
}

/// Encode a processed buffer to `output` in the requested format.
pub fn save_gray_image(
    image: &ProcessedImage,
    output: &Path,
    format: OutputFormat,
) -> Result<()> {
    let buffer = image::GrayImage::from_raw(
        image.width as u32,
        image.height as u32,
        image.gray.clone(),
    )
    .ok_or_else(|| Error::Processing("buffer length does not match dimensions".to_string()))?;

    let format = match format {
        OutputFormat::Png => image::ImageFormat::Png,
        OutputFormat::Jpeg => image::ImageFormat::Jpeg,
    };
    buffer.save_with_format(output, format)?;
    Ok(())
}

/// Process a single image file to `output` using `params`.
pub fn process_image_to_path(
    input: &Path,
    output: &Path,
    params: &ProcessingParams,
) -> Result<()> {
    let gray = load_gray_image(input)?;
    let processed = process_gray_to_buffer(&gray, params)?;
    save_gray_image(&processed, output, params.format)
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff"];

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Return an iterator over regular files directly under `input_dir`.
pub fn iterate_images(input_dir: &Path) -> Result<std::vec::IntoIter<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files.into_iter())
}

/// Process all supported image files from `input_dir` into `output_dir`
/// using `params`. If `continue_on_error` is true, per-file errors are
/// counted in the report and processing continues; otherwise, the first
/// error is returned.
pub fn process_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &ProcessingParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    std::fs::create_dir_all(output_dir)?;

    let mut report = BatchReport::default();

    for path in iterate_images(input_dir)? {
        if !is_supported_image(&path) {
            info!("Skipping non-image file: {:?}", path);
            report.skipped += 1;
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            info!("Skipping file with unusable name: {:?}", path);
            report.skipped += 1;
            continue;
        };
        let output_path = output_dir.join(format!("{}.{}", stem, params.format.extension()));

        info!("Processing: {:?} -> {:?}", path, output_path);
        match process_image_to_path(&path, &output_path, params) {
            Ok(()) => {
                info!("Successfully processed: {:?}", path);
                report.processed += 1;
            }
            Err(e) if continue_on_error => {
                warn!("Error processing {:?}: {}", path, e);
                report.errors += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}
