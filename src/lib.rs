#![doc = r#"
DOCPREP — a document image preprocessing toolkit.

This crate normalizes variable-sized scanned grayscale content (text,
glyphs, objects on a dark background) into fixed-margin canvases: it
binarizes (or accepts) a foreground mask, finds the tight bounding box of
the foreground via row/column projection sums, crops the original image to
that box, and re-embeds the crop in a zero-filled canvas with per-side
padding. An optional ratio-preserving resize brings the result to a target
height. It powers the DOCPREP CLI and can be embedded in OCR and document
pipelines.

Quick start: process an image file
----------------------------------
```rust,no_run
use std::path::Path;
use docprep::{process_image_to_path, OutputFormat, Padding, ProcessingParams, ThresholdStrategy};

fn main() -> docprep::Result<()> {
    let params = ProcessingParams {
        format: OutputFormat::Png,
        threshold: ThresholdStrategy::Otsu,
        padding: Padding::uniform(8),
        height: Some(64),
    };

    process_image_to_path(
        Path::new("/data/scan.png"),
        Path::new("/out/normalized.png"),
        &params,
    )
}
```

Crop an in-memory array
-----------------------
```rust
use ndarray::Array2;
use docprep::{crop_boundary_and_padding, MaskSource, Padding, ThresholdStrategy};

fn crop(image: &Array2<u8>) -> docprep::Result<Array2<u8>> {
    crop_boundary_and_padding(
        image.view().into_dyn(),
        Padding::new(4, 4, 2, 2),
        MaskSource::Derive(ThresholdStrategy::Otsu),
    )
}
```

Supplying your own mask
-----------------------
When the default thresholding is not what you want, pass
`MaskSource::Provided` with a mask of the same shape as the image; any
non-zero sample counts as foreground. The crop is always taken from the
image itself, so gray values under the foreground survive.

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use docprep::{process_directory_to_path, ProcessingParams};

fn main() -> docprep::Result<()> {
    let report = process_directory_to_path(
        Path::new("/data/scans"),
        Path::new("/out"),
        &ProcessingParams::default(),
        true, // continue_on_error
    )?;
    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

Error handling
--------------
All public functions return `docprep::Result<T>`; match on `docprep::Error`
to handle specific cases, e.g. `EmptyForeground` for blank pages or
`ShapeMismatch` for a mask that does not cover the image.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — core types (`Padding`, `MaskSource`, `ThresholdStrategy`, ...).
- [`core`] — low-level processing primitives.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::ProcessingParams;
pub use crate::error::{Error, Result};
pub use crate::types::{
    BoundingBox, MaskSource, OutputFormat, Padding, ThresholdStrategy,
};

// Processing primitives
pub use crate::core::processing::binarize::{
    DEFAULT_FIXED_CUTOFF, binarize, fixed_threshold, otsu_cutoff,
};
pub use crate::core::processing::crop::{crop_boundary_and_padding, foreground_bounds};
pub use crate::core::processing::resize::resize_height_keep_ratio;

// High-level API re-exports
pub use crate::api::{
    BatchReport, ProcessedImage, iterate_images, load_gray_image, process_directory_to_path,
    process_gray_to_buffer, process_image_to_path, save_gray_image,
};
