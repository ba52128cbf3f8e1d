use rayon::prelude::*;
use thiserror::Error;

use texel_image::Image;
use texel_tensor::Tensor2;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// The row stride for AutoRows must be valid.
    #[error("row stride must be > 0 for AutoRows strategy")]
    InvalidRowStride(usize),

    /// Input and output sizes do not match.
    #[error("query and destination slices must have matching lengths")]
    SizeMismatch,
}

/// Controls how parallel operations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool to process every query in parallel.
    ///
    /// This maximizes parallelism but may have overhead for small batches.
    #[default]
    ParallelElements,

    /// Use the global Rayon thread pool to process blocks of queries in parallel.
    ///
    /// The value is the number of queries handled by one task.
    AutoRows(usize),

    /// Run sequentially on the current thread.
    ///
    /// Useful for small batches, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

/// Apply a function to each query of a batch, writing one `chunk` sized slot per query.
///
/// Query `i` is the pair `(rows[i], cols[i])` and owns `dst[i * chunk..(i + 1) * chunk]`.
/// Every precondition is checked before the first write, so an error leaves `dst`
/// untouched.
///
/// # Arguments
///
/// * `rows` - The row coordinate of each query.
/// * `cols` - The column coordinate of each query.
/// * `dst` - The destination buffer of length `rows.len() * chunk`.
/// * `chunk` - The number of destination values per query.
/// * `strategy` - The execution strategy.
/// * `f` - The function to apply to each `(row, col, slot)` triple.
pub fn par_iter_queries<T, U>(
    rows: &[T],
    cols: &[T],
    dst: &mut [U],
    chunk: usize,
    strategy: ExecutionStrategy,
    f: impl Fn(&T, &T, &mut [U]) + Send + Sync,
) -> Result<(), ParallelError>
where
    T: Sync,
    U: Send,
{
    if chunk == 0
        || rows.len() != cols.len()
        || rows.len().checked_mul(chunk) != Some(dst.len())
    {
        return Err(ParallelError::SizeMismatch);
    }

    let run_elements = |dst: &mut [U]| {
        rows.par_iter()
            .zip(cols.par_iter())
            .zip(dst.par_chunks_exact_mut(chunk))
            .for_each(|((r, c), slot)| f(r, c, slot));
    };

    match strategy {
        ExecutionStrategy::Serial => {
            rows.iter()
                .zip(cols.iter())
                .zip(dst.chunks_exact_mut(chunk))
                .for_each(|((r, c), slot)| f(r, c, slot));
        }
        ExecutionStrategy::ParallelElements => run_elements(dst),
        ExecutionStrategy::AutoRows(stride) => {
            if stride == 0 {
                return Err(ParallelError::InvalidRowStride(stride));
            }
            // a block larger than the batch covers all of it
            let block = stride.saturating_mul(chunk);
            rows.par_chunks(stride)
                .zip(cols.par_chunks(stride))
                .zip(dst.par_chunks_mut(block))
                .for_each(|((rows_block, cols_block), dst_block)| {
                    rows_block
                        .iter()
                        .zip(cols_block.iter())
                        .zip(dst_block.chunks_exact_mut(chunk))
                        .for_each(|((r, c), slot)| f(r, c, slot));
                });
        }
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ParallelError::InvalidThreadCount(n));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| run_elements(dst));
        }
    }

    Ok(())
}

/// Apply a function to each pixel for grid sampling in parallel.
///
/// The maps hold one coordinate per destination pixel and are walked row by row
/// alongside the destination image.
pub fn par_iter_rows_resample<T, const C: usize>(
    dst: &mut Image<T, C>,
    map_x: &Tensor2<T>,
    map_y: &Tensor2<T>,
    f: impl Fn(&T, &T, &mut [T]) + Send + Sync,
) where
    T: Send + Sync,
{
    let cols = dst.cols();
    if cols == 0 || C == 0 {
        return;
    }

    dst.as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .zip(map_x.as_slice().par_chunks_exact(cols))
        .zip(map_y.as_slice().par_chunks_exact(cols))
        .for_each(|((dst_chunk, map_x_chunk), map_y_chunk)| {
            dst_chunk
                .chunks_exact_mut(C)
                .zip(map_x_chunk.iter().zip(map_y_chunk.iter()))
                .for_each(|(dst_pixel, (x, y))| {
                    f(x, y, dst_pixel);
                });
        });
}
