use std::ops::Range;

use texel_image::ImageSize;
use texel_tensor::{Tensor2, TensorError};

use super::interpolate::InterpolationDtype;

/// Create a meshgrid of x and y coordinates
///
/// # Arguments
///
/// * `rows` - The number of rows indicating the height of the grid
/// * `cols` - The number of columns indicating the width of the grid
///
/// # Returns
///
/// A tuple of 2D arrays of shape (rows, cols) containing the x and y coordinates
pub fn meshgrid<T: InterpolationDtype>(
    rows: usize,
    cols: usize,
) -> Result<(Tensor2<T>, Tensor2<T>), TensorError> {
    let map_x = Tensor2::<usize>::from_shape_fn([rows, cols], |[_, c]| c).cast()?;
    let map_y = Tensor2::<usize>::from_shape_fn([rows, cols], |[r, _]| r).cast()?;

    Ok((map_x, map_y))
}

/// Create a meshgrid mapping a `dst_size` grid onto a `src_size` image.
///
/// The corner pixels of both grids are aligned, so the first and last
/// coordinates along each axis are `0` and `src - 1`. An axis of length 1
/// samples coordinate `0`.
pub fn meshgrid_scaled<T: InterpolationDtype>(
    dst_size: ImageSize,
    src_size: ImageSize,
) -> Result<(Tensor2<T>, Tensor2<T>), TensorError> {
    let step = |dst: usize, src: usize| {
        if dst > 1 {
            src.saturating_sub(1) as f64 / (dst - 1) as f64
        } else {
            0.0
        }
    };
    let step_x = step(dst_size.width, src_size.width);
    let step_y = step(dst_size.height, src_size.height);

    let shape = [dst_size.height, dst_size.width];
    let map_x = Tensor2::<f64>::from_shape_fn(shape, |[_, c]| c as f64 * step_x).cast()?;
    let map_y = Tensor2::<f64>::from_shape_fn(shape, |[r, _]| r as f64 * step_y).cast()?;

    Ok((map_x, map_y))
}

/// Flattened query coordinates for every integer cell of a window.
///
/// The queries are emitted in row-major order, so the sampled batch reshapes
/// directly into a `(rows.len(), cols.len(), C)` image.
///
/// # Arguments
///
/// * `rows` - The range of row indices of the window.
/// * `cols` - The range of column indices of the window.
///
/// # Returns
///
/// The row and column coordinates of the queries, both of length
/// `rows.len() * cols.len()`.
///
/// # Example
///
/// ```
/// use texel_imgproc::interpolation::grid::grid_queries;
///
/// let (rows, cols) = grid_queries::<f32>(2..4, 5..7).unwrap();
/// assert_eq!(rows, vec![2.0, 2.0, 3.0, 3.0]);
/// assert_eq!(cols, vec![5.0, 6.0, 5.0, 6.0]);
/// ```
pub fn grid_queries<T: InterpolationDtype>(
    rows: Range<usize>,
    cols: Range<usize>,
) -> Result<(Vec<T>, Vec<T>), TensorError> {
    let shape = [rows.len(), cols.len()];
    let (row_start, col_start) = (rows.start, cols.start);

    let query_rows = Tensor2::<usize>::from_shape_fn(shape, |[r, _]| row_start + r).cast()?;
    let query_cols = Tensor2::<usize>::from_shape_fn(shape, |[_, c]| col_start + c).cast()?;

    Ok((query_rows.into_vec(), query_cols.into_vec()))
}
