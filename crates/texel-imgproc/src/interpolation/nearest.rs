use texel_image::Image;

use super::coords::{clamp_index, pixel_at, round_coord};
use super::interpolate::InterpolationDtype;

/// Kernel for nearest neighbor interpolation
///
/// Coordinates are rounded half away from zero, then clamped to the image.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values.
pub(crate) fn nearest_neighbor_interpolation<T: InterpolationDtype, const C: usize>(
    image: &Image<T, C>,
    u: T,
    v: T,
) -> [T; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let iu = clamp_index(round_coord(u), cols);
    let iv = clamp_index(round_coord(v), rows);

    let mut pixel = [T::zero(); C];
    pixel.copy_from_slice(pixel_at(image, iv, iu));

    pixel
}

#[cfg(test)]
mod tests {
    use super::*;
    use texel_image::{ImageError, ImageSize};

    fn ramp() -> Result<Image<f64, 1>, ImageError> {
        Image::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
        )
    }

    #[test]
    fn nearest_on_grid() -> Result<(), ImageError> {
        let image = ramp()?;
        assert_eq!(nearest_neighbor_interpolation(&image, 2.0, 1.0), [5.0]);
        assert_eq!(nearest_neighbor_interpolation(&image, 0.0, 0.0), [0.0]);
        Ok(())
    }

    #[test]
    fn nearest_rounding() -> Result<(), ImageError> {
        let image = ramp()?;
        assert_eq!(nearest_neighbor_interpolation(&image, 0.4, 0.6), [3.0]);
        // ties go away from zero
        assert_eq!(nearest_neighbor_interpolation(&image, 0.5, 0.0), [1.0]);
        assert_eq!(nearest_neighbor_interpolation(&image, 1.5, 0.0), [2.0]);
        Ok(())
    }

    #[test]
    fn nearest_out_of_bounds() -> Result<(), ImageError> {
        let image = ramp()?;
        assert_eq!(nearest_neighbor_interpolation(&image, -3.0, -0.5), [0.0]);
        assert_eq!(nearest_neighbor_interpolation(&image, 10.0, 7.2), [5.0]);
        Ok(())
    }
}
