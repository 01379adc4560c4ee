//! Ratio-preserving resize for grayscale rasters.
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use ndarray::{Array2, ArrayView2};
use tracing::info;

use crate::error::{Error, Result};

/// Resize `image` to `new_height`, keeping the aspect ratio.
/// The new width truncates to `width * new_height / height` (at least 1).
pub fn resize_height_keep_ratio(
    image: ArrayView2<'_, u8>,
    new_height: usize,
) -> Result<Array2<u8>> {
    let (rows, cols) = image.dim();
    if rows == 0 || cols == 0 || new_height == 0 {
        return Err(Error::InvalidInput(
            "resize requires a non-empty image and a non-zero target height".to_string(),
        ));
    }

    let new_width = ((cols as f64 * new_height as f64 / rows as f64) as usize).max(1);
    if (new_height, new_width) == (rows, cols) {
        return Ok(image.to_owned());
    }

    info!(
        "Resizing image: {}x{} -> {}x{}",
        cols, rows, new_width, new_height
    );

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let data: Vec<u8> = image.iter().copied().collect();
    let src_image = Image::from_vec_u8(cols as u32, rows as u32, data, PixelType::U8)
        .map_err(Error::external)?;
    let mut dst_image = Image::new(new_width as u32, new_height as u32, PixelType::U8);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::external)?;

    Array2::from_shape_vec((new_height, new_width), dst_image.into_vec())
        .map_err(Error::external)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_ratio_when_downscaling() {
        let im = Array2::<u8>::from_elem((40, 60), 200);
        let out = resize_height_keep_ratio(im.view(), 20).unwrap();
        assert_eq!(out.dim(), (20, 30));
        // A constant image stays constant under normalized convolution.
        assert!(out.iter().all(|&v| v == 200));
    }

    #[test]
    fn same_height_is_identity() {
        let im = Array2::<u8>::from_shape_fn((8, 12), |(r, c)| (r * 12 + c) as u8);
        let out = resize_height_keep_ratio(im.view(), 8).unwrap();
        assert_eq!(out, im);
    }

    #[test]
    fn width_truncates() {
        let im = Array2::<u8>::from_elem((10, 15), 128);
        // 15 * 12 / 10 = 18
        let out = resize_height_keep_ratio(im.view(), 12).unwrap();
        assert_eq!(out.dim(), (12, 18));
    }

    #[test]
    fn zero_target_height_is_rejected() {
        let im = Array2::<u8>::from_elem((4, 4), 1);
        assert!(matches!(
            resize_height_keep_ratio(im.view(), 0),
            Err(Error::InvalidInput(_))
        ));
    }
}
