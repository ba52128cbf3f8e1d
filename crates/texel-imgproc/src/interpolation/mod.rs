//! Point sampling of multi-channel images at continuous coordinates.
//!
//! This module evaluates "what value is at `(row, col)`" for real valued
//! coordinates, reconstructing the signal from the image grid with one of
//! three kernels.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: copies the closest pixel, no arithmetic
//! - **Bilinear**: weighted average of the 2x2 neighborhood (default)
//! - **Bicubic**: separable cubic convolution over the 4x4 neighborhood
//!
//! Every kernel reproduces the source pixel exactly at integer coordinates,
//! and neighbors outside the image are replicated from the nearest edge.
//!
//! # Example
//!
//! ```
//! use texel_image::{Image, ImageSize};
//! use texel_imgproc::interpolation::{sample, InterpolationMode};
//!
//! let image = Image::<f32, 1>::new(
//!     ImageSize { width: 2, height: 2 },
//!     vec![0.0, 1.0, 2.0, 3.0],
//! ).unwrap();
//!
//! let out = sample(&image, &[0.5, 1.0], &[0.5, 0.0], InterpolationMode::Bilinear).unwrap();
//! assert_eq!(out.shape, [2, 1]);
//! assert_eq!(out.as_slice(), &[1.5, 2.0]);
//! ```

mod bicubic;
mod bilinear;
mod coords;
mod error;

/// Grid generation and coordinate mapping utilities.
///
/// Functions for generating coordinate grids used as query batches
/// and as maps for [`remap`].
pub mod grid;

pub(crate) mod interpolate;
mod nearest;
mod remap;
mod sample;

pub use bicubic::{cubic_weight, BICUBIC_A};
pub use error::InterpolationError;
pub use interpolate::{interpolate_pixel, InterpolationDtype, InterpolationMode};
pub use remap::remap;
pub use sample::{sample, sample_by_name, sample_into, sample_with};
