//! Foreground bounding-box extraction and re-padding.
//!
//! Crops a grayscale raster to the tight bounding box of its non-background
//! content, then re-embeds the crop in a newly allocated canvas with
//! per-side padding. The boundary search runs on a binary mask; the crop
//! itself is taken from the original image, so gray values under the
//! foreground survive.
use ndarray::{Array2, ArrayView2, ArrayViewD, Ix2, s};
use tracing::debug;

use crate::core::processing::binarize::binarize;
use crate::error::{Error, Result};
use crate::types::{BoundingBox, MaskSource, Padding};

/// Crop `image` to the tight bounding box of its foreground, then write the
/// crop into a zero-filled canvas with `padding` background samples on each
/// side.
///
/// For input
/// ```text
/// 0   255 0   0
/// 0   255 255 0
/// 0   255 0   0
/// 0   0   0   0
/// ```
/// the zero-padding output is
/// ```text
/// 255 0
/// 255 255
/// 255 0
/// ```
///
/// The mask either comes from the caller (`MaskSource::Provided`, same shape
/// as the image, non-zero means foreground) or is derived from the image with
/// the requested threshold policy (`MaskSource::Derive`).
pub fn crop_boundary_and_padding(
    image: ArrayViewD<'_, u8>,
    padding: Padding,
    mask: MaskSource<'_>,
) -> Result<Array2<u8>> {
    let image = image
        .into_dimensionality::<Ix2>()
        .map_err(|_| Error::InvalidInput("must be gray scale image as uint8 ndarray".to_string()))?;

    let mask: Array2<u8> = match mask {
        MaskSource::Provided(provided) => {
            if provided.shape() != image.shape() {
                return Err(Error::ShapeMismatch {
                    expected: image.shape().to_vec(),
                    actual: provided.shape().to_vec(),
                });
            }
            // Shapes match, so the mask is two-dimensional as well.
            provided
                .into_dimensionality::<Ix2>()
                .map_err(|_| {
                    Error::InvalidInput("mask must be gray scale as uint8 ndarray".to_string())
                })?
                .to_owned()
        }
        MaskSource::Derive(strategy) => binarize(image, strategy),
    };

    let bounds = foreground_bounds(mask.view())?;
    debug!(
        "Foreground bounds: rows {}..{}, cols {}..{}",
        bounds.row_start, bounds.row_end, bounds.col_start, bounds.col_end
    );

    let crop = image.slice(s![
        bounds.row_start..bounds.row_end,
        bounds.col_start..bounds.col_end
    ]);

    let out_rows = bounds.height() + padding.vertical();
    let out_cols = bounds.width() + padding.horizontal();
    let mut canvas = Array2::<u8>::zeros((out_rows, out_cols));
    canvas
        .slice_mut(s![
            padding.top..padding.top + bounds.height(),
            padding.left..padding.left + bounds.width()
        ])
        .assign(&crop);

    Ok(canvas)
}

/// Locate the smallest rectangle whose outside rows and columns all sum to
/// zero in `mask`. Fails with `EmptyForeground` when the mask has no
/// non-zero sample.
pub fn foreground_bounds(mask: ArrayView2<'_, u8>) -> Result<BoundingBox> {
    let (rows, cols) = mask.dim();
    let mut row_sums = vec![0u64; rows];
    let mut col_sums = vec![0u64; cols];
    for ((r, c), &v) in mask.indexed_iter() {
        row_sums[r] += u64::from(v);
        col_sums[c] += u64::from(v);
    }

    let nonzero = |&sum: &u64| sum != 0;
    let row_start = row_sums
        .iter()
        .position(nonzero)
        .ok_or(Error::EmptyForeground)?;
    let row_end = row_sums
        .iter()
        .rposition(|&sum| sum != 0)
        .map(|r| r + 1)
        .ok_or(Error::EmptyForeground)?;
    let col_start = col_sums
        .iter()
        .position(nonzero)
        .ok_or(Error::EmptyForeground)?;
    let col_end = col_sums
        .iter()
        .rposition(|&sum| sum != 0)
        .map(|c| c + 1)
        .ok_or(Error::EmptyForeground)?;

    Ok(BoundingBox {
        row_start,
        row_end,
        col_start,
        col_end,
    })
}

#[cfg(test)]
mod tests {
    use ndarray::Array3;

    use super::*;
    use crate::types::ThresholdStrategy;

    /// np.pad equivalent: embed `block` into a larger zero array.
    fn embed(block: &Array2<u8>, top: usize, bottom: usize, left: usize, right: usize) -> Array2<u8> {
        let (h, w) = block.dim();
        let mut out = Array2::zeros((h + top + bottom, w + left + right));
        out.slice_mut(s![top..top + h, left..left + w]).assign(block);
        out
    }

    fn derive_otsu() -> MaskSource<'static> {
        MaskSource::Derive(ThresholdStrategy::Otsu)
    }

    #[test]
    fn recovers_embedded_binary_block() {
        let mut block = Array2::<u8>::zeros((3, 3));
        block[[0, 0]] = 255;
        block[[2, 2]] = 255;
        let padded = embed(&block, 3, 2, 2, 3);

        let out =
            crop_boundary_and_padding(padded.view().into_dyn(), Padding::ZERO, derive_otsu())
                .unwrap();
        assert_eq!(out, block);
    }

    #[test]
    fn recovers_embedded_gray_block_with_derived_mask() {
        let mut block = Array2::<u8>::zeros((4, 5));
        block[[0, 0]] = 128;
        block[[3, 4]] = 255;
        block[[2, 1]] = 128;
        let padded = embed(&block, 23, 2, 2, 44);

        let out =
            crop_boundary_and_padding(padded.view().into_dyn(), Padding::ZERO, derive_otsu())
                .unwrap();
        assert_eq!(out, block);
    }

    #[test]
    fn supplied_mask_steers_bounds_and_gray_values_survive() {
        let mut block = Array2::<u8>::zeros((4, 5));
        block[[0, 0]] = 128;
        block[[3, 4]] = 255;
        block[[2, 1]] = 64;

        let mut mask_block = Array2::<u8>::zeros((4, 5));
        mask_block[[0, 0]] = 255;
        mask_block[[3, 4]] = 255;
        mask_block[[2, 1]] = 255;

        let padded = embed(&block, 23, 2, 2, 44);
        let padded_mask = embed(&mask_block, 23, 2, 2, 44);

        let out = crop_boundary_and_padding(
            padded.view().into_dyn(),
            Padding::ZERO,
            MaskSource::Provided(padded_mask.view().into_dyn()),
        )
        .unwrap();
        // The crop comes from the image, not the mask.
        assert_eq!(out, block);
    }

    #[test]
    fn mask_overrides_raw_intensities() {
        // Intensity 64 would not survive the fixed cutoff, but the supplied
        // mask marks only that sample as foreground.
        let mut im = Array2::<u8>::zeros((5, 5));
        im[[1, 1]] = 64;
        im[[3, 3]] = 200;

        let mut mask = Array2::<u8>::zeros((5, 5));
        mask[[1, 1]] = 255;

        let out = crop_boundary_and_padding(
            im.view().into_dyn(),
            Padding::ZERO,
            MaskSource::Provided(mask.view().into_dyn()),
        )
        .unwrap();
        assert_eq!(out.dim(), (1, 1));
        assert_eq!(out[[0, 0]], 64);
    }

    #[test]
    fn per_side_padding_offsets_the_crop() {
        let block = Array2::<u8>::ones((3, 3));
        let out = crop_boundary_and_padding(
            block.view().into_dyn(),
            Padding::new(10, 7, 2, 5),
            derive_otsu(),
        )
        .unwrap();

        let mut expected = Array2::<u8>::zeros((10, 20));
        expected.slice_mut(s![2..5, 10..13]).assign(&block);
        assert_eq!(out, expected);
    }

    #[test]
    fn uniform_padding_matches_quad_form() {
        let block = Array2::<u8>::ones((3, 3));
        let uniform = crop_boundary_and_padding(
            block.view().into_dyn(),
            Padding::uniform(3),
            derive_otsu(),
        )
        .unwrap();
        let quad = crop_boundary_and_padding(
            block.view().into_dyn(),
            Padding::from_slice(&[3, 3, 3, 3]).unwrap(),
            derive_otsu(),
        )
        .unwrap();

        assert_eq!(uniform.dim(), (9, 9));
        assert_eq!(uniform, quad);
        let mut expected = Array2::<u8>::zeros((9, 9));
        expected.slice_mut(s![3..6, 3..6]).assign(&block);
        assert_eq!(uniform, expected);
    }

    #[test]
    fn single_foreground_sample_yields_unit_crop() {
        let mut im = Array2::<u8>::zeros((100, 200));
        im[[30, 30]] = 255;
        let out =
            crop_boundary_and_padding(im.view().into_dyn(), Padding::ZERO, derive_otsu()).unwrap();
        assert_eq!(out.dim(), (1, 1));
        assert_eq!(out[[0, 0]], 255);
    }

    #[test]
    fn all_zero_mask_is_rejected() {
        let im = Array2::<u8>::zeros((100, 200));
        let err = crop_boundary_and_padding(im.view().into_dyn(), Padding::ZERO, derive_otsu())
            .unwrap_err();
        assert!(matches!(err, Error::EmptyForeground));
    }

    #[test]
    fn channelled_image_is_rejected() {
        let im = Array3::<u8>::from_elem((5, 5, 3), 255);
        let err = crop_boundary_and_padding(im.view().into_dyn(), Padding::ZERO, derive_otsu())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn mask_shape_must_match_image() {
        let im = Array2::<u8>::ones((3, 3));
        let big_mask = Array2::<u8>::from_elem((4, 4), 255);
        let err = crop_boundary_and_padding(
            im.view().into_dyn(),
            Padding::ZERO,
            MaskSource::Provided(big_mask.view().into_dyn()),
        )
        .unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));

        let small_mask = Array2::<u8>::from_elem((2, 2), 255);
        let err = crop_boundary_and_padding(
            im.view().into_dyn(),
            Padding::ZERO,
            MaskSource::Provided(small_mask.view().into_dyn()),
        )
        .unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }

    #[test]
    fn nonbinary_mask_values_count_as_foreground() {
        let mut im = Array2::<u8>::zeros((4, 4));
        im[[1, 1]] = 9;
        im[[2, 2]] = 9;
        let mut mask = Array2::<u8>::zeros((4, 4));
        mask[[1, 1]] = 1;
        mask[[2, 2]] = 7;

        let bounds = foreground_bounds(mask.view()).unwrap();
        assert_eq!(
            bounds,
            BoundingBox {
                row_start: 1,
                row_end: 3,
                col_start: 1,
                col_end: 3,
            }
        );

        let out = crop_boundary_and_padding(
            im.view().into_dyn(),
            Padding::ZERO,
            MaskSource::Provided(mask.view().into_dyn()),
        )
        .unwrap();
        assert_eq!(out.dim(), (2, 2));
    }
}
