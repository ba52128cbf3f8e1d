use texel_image::ImageError;
use texel_tensor::TensorError;

use crate::parallel::ParallelError;

/// An error type for the interpolation module.
///
/// Every variant is raised before any output value is written.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum InterpolationError {
    /// The requested interpolation mode is not one of the supported kernels.
    #[error("Invalid interpolation mode '{0}', expected one of: nearest, bilinear, bicubic")]
    InvalidMode(String),

    /// The row and column coordinate sequences have different lengths.
    #[error("Coordinate length mismatch: {rows} rows vs {cols} cols")]
    ShapeMismatch {
        /// Number of row coordinates
        rows: usize,
        /// Number of column coordinates
        cols: usize,
    },

    /// The source image has an empty dimension and cannot be sampled.
    #[error("Cannot sample a degenerate image of shape ({height}, {width}, {channels})")]
    DegenerateImage {
        /// Image height
        height: usize,
        /// Image width
        width: usize,
        /// Number of channels
        channels: usize,
    },

    /// A caller supplied output buffer does not have the (queries, channels) shape.
    #[error("Output shape mismatch: expected {expected:?}, got {actual:?}")]
    OutputShapeMismatch {
        /// Shape the output must have
        expected: [usize; 2],
        /// Shape of the supplied output
        actual: [usize; 2],
    },

    /// Error from the image module.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error from the tensor module.
    #[error(transparent)]
    Tensor(#[from] TensorError),

    /// Error from the execution layer.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}
