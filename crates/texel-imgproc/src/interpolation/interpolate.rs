use std::fmt;
use std::str::FromStr;

use num_traits::Float;
use texel_image::Image;

use super::bicubic::bicubic_interpolation;
use super::bilinear::bilinear_interpolation;
use super::error::InterpolationError;
use super::nearest::nearest_neighbor_interpolation;

/// Floating point element types the interpolation kernels operate on.
///
/// Implemented for `f32` and `f64`. Integer images are promoted with
/// [`Image::cast`] before sampling.
pub trait InterpolationDtype: Float + From<f32> + Send + Sync + 'static {}

impl<T> InterpolationDtype for T where T: Float + From<f32> + Send + Sync + 'static {}

/// Interpolation mode for the sampling operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum InterpolationMode {
    /// Nearest neighbor interpolation
    Nearest,
    /// Bilinear interpolation
    #[default]
    Bilinear,
    /// Bicubic interpolation
    Bicubic,
}

impl InterpolationMode {
    /// The lowercase name of the mode, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            InterpolationMode::Nearest => "nearest",
            InterpolationMode::Bilinear => "bilinear",
            InterpolationMode::Bicubic => "bicubic",
        }
    }
}

impl fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterpolationMode {
    type Err = InterpolationError;

    /// Parse a mode name, ignoring case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use texel_imgproc::interpolation::InterpolationMode;
    ///
    /// let mode: InterpolationMode = "Bicubic".parse().unwrap();
    /// assert_eq!(mode, InterpolationMode::Bicubic);
    /// assert!("lanczos".parse::<InterpolationMode>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(InterpolationMode::Nearest),
            "bilinear" => Ok(InterpolationMode::Bilinear),
            "bicubic" => Ok(InterpolationMode::Bicubic),
            _ => Err(InterpolationError::InvalidMode(s.to_string())),
        }
    }
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `image` - The input image container with shape (height, width, C). Must not be empty.
/// * `u` - The x (column) coordinate of the pixel to interpolate.
/// * `v` - The y (row) coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The interpolated values of the `C` channels.
///
/// # Panics
///
/// Panics if the image has no rows or no columns. The batch entry points
/// check this and return [`InterpolationError::DegenerateImage`] instead.
pub fn interpolate_pixel<T: InterpolationDtype, const C: usize>(
    image: &Image<T, C>,
    u: T,
    v: T,
    interpolation: InterpolationMode,
) -> [T; C] {
    match interpolation {
        InterpolationMode::Nearest => nearest_neighbor_interpolation(image, u, v),
        InterpolationMode::Bilinear => bilinear_interpolation(image, u, v),
        InterpolationMode::Bicubic => bicubic_interpolation(image, u, v),
    }
}
