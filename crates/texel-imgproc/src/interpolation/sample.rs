use texel_image::Image;
use texel_tensor::Tensor2;

use super::error::InterpolationError;
use super::interpolate::{interpolate_pixel, InterpolationDtype, InterpolationMode};
use crate::parallel::{self, ExecutionStrategy};

/// Check the preconditions shared by every batch entry point.
fn check_inputs<T, const C: usize>(
    image: &Image<T, C>,
    rows: &[T],
    cols: &[T],
) -> Result<(), InterpolationError> {
    if image.rows() == 0 || image.cols() == 0 || C == 0 {
        return Err(InterpolationError::DegenerateImage {
            height: image.rows(),
            width: image.cols(),
            channels: C,
        });
    }

    if rows.len() != cols.len() {
        return Err(InterpolationError::ShapeMismatch {
            rows: rows.len(),
            cols: cols.len(),
        });
    }

    Ok(())
}

/// Sample an image at a batch of continuous coordinates.
///
/// Query `i` is the point `(rows[i], cols[i])` and its `C` channel values land in
/// row `i` of the output. Coordinates outside the image are valid; neighbors that
/// fall outside are replicated from the nearest edge.
///
/// The batch runs on the global Rayon thread pool, see [`sample_with`] to choose
/// another [`ExecutionStrategy`].
///
/// # Arguments
///
/// * `image` - The input image container with shape (height, width, C).
/// * `rows` - The row (y) coordinate of each query.
/// * `cols` - The column (x) coordinate of each query.
/// * `mode` - The interpolation mode to use.
///
/// # Returns
///
/// A tensor of shape (N, C) with the sampled values, in query order.
///
/// # Errors
///
/// * [`InterpolationError::ShapeMismatch`] if `rows` and `cols` differ in length.
/// * [`InterpolationError::DegenerateImage`] if the image has no rows, columns or channels.
///
/// # Example
///
/// ```
/// use texel_image::{Image, ImageSize};
/// use texel_imgproc::interpolation::{sample, InterpolationMode};
///
/// let image = Image::<f32, 3>::from_size_val(ImageSize { width: 4, height: 4 }, 1.0).unwrap();
/// let out = sample(&image, &[0.5, 3.0, -2.0], &[1.25, 3.0, 9.0], InterpolationMode::Bicubic).unwrap();
///
/// assert_eq!(out.shape, [3, 3]);
/// ```
pub fn sample<T: InterpolationDtype, const C: usize>(
    image: &Image<T, C>,
    rows: &[T],
    cols: &[T],
    mode: InterpolationMode,
) -> Result<Tensor2<T>, InterpolationError> {
    sample_with(image, rows, cols, mode, ExecutionStrategy::default())
}

/// Sample an image at a batch of coordinates with an explicit execution strategy.
///
/// Same contract as [`sample`].
///
/// # Errors
///
/// In addition to the errors of [`sample`], an invalid strategy (e.g. `Fixed(0)`)
/// is reported as [`InterpolationError::Parallel`].
pub fn sample_with<T: InterpolationDtype, const C: usize>(
    image: &Image<T, C>,
    rows: &[T],
    cols: &[T],
    mode: InterpolationMode,
    strategy: ExecutionStrategy,
) -> Result<Tensor2<T>, InterpolationError> {
    check_inputs(image, rows, cols)?;

    let mut dst = Tensor2::zeros([rows.len(), C]);
    sample_into(image, rows, cols, mode, &mut dst, strategy)?;

    Ok(dst)
}

/// Sample an image at a batch of coordinates into a caller provided buffer.
///
/// All preconditions are checked before the first write; on error `dst` is left
/// untouched.
///
/// # Arguments
///
/// * `image` - The input image container with shape (height, width, C).
/// * `rows` - The row (y) coordinate of each query.
/// * `cols` - The column (x) coordinate of each query.
/// * `mode` - The interpolation mode to use.
/// * `dst` - The output tensor, which must have shape (N, C).
/// * `strategy` - How to distribute the queries over threads.
///
/// # Errors
///
/// * [`InterpolationError::OutputShapeMismatch`] if `dst` is not (N, C).
/// * The errors of [`sample_with`].
pub fn sample_into<T: InterpolationDtype, const C: usize>(
    image: &Image<T, C>,
    rows: &[T],
    cols: &[T],
    mode: InterpolationMode,
    dst: &mut Tensor2<T>,
    strategy: ExecutionStrategy,
) -> Result<(), InterpolationError> {
    check_inputs(image, rows, cols)?;

    let expected = [rows.len(), C];
    if dst.shape != expected {
        return Err(InterpolationError::OutputShapeMismatch {
            expected,
            actual: dst.shape,
        });
    }

    log::debug!(
        "sampling {} queries over a {}x{}x{} image with {} interpolation",
        rows.len(),
        image.rows(),
        image.cols(),
        C,
        mode
    );

    parallel::par_iter_queries(
        rows,
        cols,
        dst.as_slice_mut(),
        C,
        strategy,
        |&row, &col, dst_pixel| {
            dst_pixel.copy_from_slice(&interpolate_pixel(image, col, row, mode));
        },
    )?;

    Ok(())
}

/// Sample an image with the interpolation mode given by name.
///
/// The name is parsed before any sampling work, so an unknown mode fails fast
/// with [`InterpolationError::InvalidMode`].
///
/// # Example
///
/// ```
/// use texel_image::Image;
/// use texel_imgproc::interpolation::{sample_by_name, InterpolationError};
///
/// let image = Image::<f64, 1>::from_size_val([2, 2].into(), 0.5).unwrap();
/// assert!(sample_by_name(&image, &[0.0], &[0.0], "nearest").is_ok());
/// assert!(matches!(
///     sample_by_name(&image, &[0.0], &[0.0], "area"),
///     Err(InterpolationError::InvalidMode(_))
/// ));
/// ```
pub fn sample_by_name<T: InterpolationDtype, const C: usize>(
    image: &Image<T, C>,
    rows: &[T],
    cols: &[T],
    mode: &str,
) -> Result<Tensor2<T>, InterpolationError> {
    let mode = mode.parse::<InterpolationMode>()?;
    sample(image, rows, cols, mode)
}
