use texel_image::{Image, ImageError};
use texel_tensor::Tensor2;

use super::error::InterpolationError;
use super::interpolate::{interpolate_pixel, InterpolationDtype, InterpolationMode};
use crate::parallel;

/// Apply generic geometric transformation to an image.
///
/// Every destination pixel `(r, c)` is sampled from the source at
/// `(map_y[r, c], map_x[r, c])`, with the same kernels and edge handling as
/// [`super::sample`].
///
/// # Arguments
///
/// * `src` - The input image container with shape (height, width, C).
/// * `dst` - The output image container with shape (height, width, C).
/// * `map_x` - The x coordinates of the pixels to interpolate.
/// * `map_y` - The y coordinates of the pixels to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// # Errors
///
/// * The mapx and mapy must have the same size.
/// * The output image must have the same size as the mapx and mapy.
/// * The source image must not be empty.
pub fn remap<T: InterpolationDtype, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    map_x: &Tensor2<T>,
    map_y: &Tensor2<T>,
    interpolation: InterpolationMode,
) -> Result<(), InterpolationError> {
    if src.rows() == 0 || src.cols() == 0 || C == 0 {
        return Err(InterpolationError::DegenerateImage {
            height: src.rows(),
            width: src.cols(),
            channels: C,
        });
    }

    if map_x.shape != map_y.shape {
        return Err(ImageError::InvalidImageSize(
            map_x.shape[0],
            map_x.shape[1],
            map_y.shape[0],
            map_y.shape[1],
        )
        .into());
    }

    if dst.shape[0..2] != map_x.shape {
        return Err(ImageError::InvalidImageSize(
            map_x.shape[0],
            map_x.shape[1],
            dst.shape[0],
            dst.shape[1],
        )
        .into());
    }

    log::trace!(
        "remapping {}x{} -> {}x{} with {} interpolation",
        src.rows(),
        src.cols(),
        dst.rows(),
        dst.cols(),
        interpolation
    );

    // parallelize the remap operation by rows
    parallel::par_iter_rows_resample(dst, map_x, map_y, |&x, &y, dst_pixel| {
        dst_pixel.copy_from_slice(&interpolate_pixel(src, x, y, interpolation));
    });

    Ok(())
}
