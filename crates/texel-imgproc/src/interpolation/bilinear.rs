use texel_image::Image;

use super::coords::{pixel_at, split_coord, tap};
use super::interpolate::InterpolationDtype;

/// Kernel for bilinear interpolation
///
/// Reads the 2x2 neighborhood anchored at `(floor(v), floor(u))`, each tap
/// clamped to the image independently.
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
pub(crate) fn bilinear_interpolation<T: InterpolationDtype, const C: usize>(
    image: &Image<T, C>,
    u: T,
    v: T,
) -> [T; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let (iu, frac_u) = split_coord(u);
    let (iv, frac_v) = split_coord(v);

    let iu0 = tap(iu, 0, cols);
    let iu1 = tap(iu, 1, cols);
    let iv0 = tap(iv, 0, rows);
    let iv1 = tap(iv, 1, rows);

    let frac_uu = T::one() - frac_u;
    let frac_vv = T::one() - frac_v;

    let w00 = frac_vv * frac_uu;
    let w01 = frac_vv * frac_u;
    let w10 = frac_v * frac_uu;
    let w11 = frac_v * frac_u;

    let p00 = pixel_at(image, iv0, iu0);
    let p01 = pixel_at(image, iv0, iu1);
    let p10 = pixel_at(image, iv1, iu0);
    let p11 = pixel_at(image, iv1, iu1);

    let mut pixel = [T::zero(); C];
    for k in 0..C {
        pixel[k] = w00 * p00[k] + w01 * p01[k] + w10 * p10[k] + w11 * p11[k];
    }

    pixel
}
