use texel_image::Image;

use super::coords::{pixel_at, split_coord, tap};
use super::interpolate::InterpolationDtype;

/// Sharpness parameter `a` of the cubic convolution kernel.
///
/// `-0.5` makes the kernel a Catmull-Rom spline, which reproduces linear
/// ramps exactly and is the usual choice for image resampling.
pub const BICUBIC_A: f32 = -0.5;

/// Tap offsets of the 4-tap cubic stencil, relative to the base cell.
const TAP_OFFSETS: [isize; 4] = [-1, 0, 1, 2];

/// Cubic convolution weight at distance `x` from a tap.
///
/// ```text
/// W(x) = (a+2)|x|^3 - (a+3)|x|^2 + 1       for |x| <= 1
/// W(x) = a|x|^3 - 5a|x|^2 + 8a|x| - 4a     for 1 < |x| < 2
/// W(x) = 0                                  otherwise
/// ```
///
/// `W(0) = 1` and `W(±1) = W(±2) = 0` hold exactly in floating point.
///
/// # Examples
///
/// ```
/// use texel_imgproc::interpolation::cubic_weight;
///
/// assert_eq!(cubic_weight(0.0f32), 1.0);
/// assert_eq!(cubic_weight(1.0f32), 0.0);
/// assert_eq!(cubic_weight(0.5f64), 0.5625);
/// ```
#[inline]
pub fn cubic_weight<T: InterpolationDtype>(x: T) -> T {
    let a: T = BICUBIC_A.into();
    let two: T = 2.0f32.into();
    let three: T = 3.0f32.into();
    let four: T = 4.0f32.into();
    let five: T = 5.0f32.into();
    let eight: T = 8.0f32.into();

    let abs_x = x.abs();

    if abs_x <= T::one() {
        ((a + two) * abs_x - (a + three)) * abs_x * abs_x + T::one()
    } else if abs_x < two {
        ((a * abs_x - five * a) * abs_x + eight * a) * abs_x - four * a
    } else {
        T::zero()
    }
}

/// Weights of the four taps at offsets `-1, 0, 1, 2` for fractional offset `t`.
#[inline]
fn cubic_weights<T: InterpolationDtype>(t: T) -> [T; 4] {
    TAP_OFFSETS.map(|offset| {
        let d: T = (offset as f32).into();
        cubic_weight(t - d)
    })
}

/// Kernel for bicubic interpolation
///
/// Gathers the 4x4 neighborhood around `(floor(v), floor(u))` with every tap
/// clamped to the image, interpolates each of the four tap rows along x, then
/// interpolates the four row results along y.
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
pub(crate) fn bicubic_interpolation<T: InterpolationDtype, const C: usize>(
    image: &Image<T, C>,
    u: T,
    v: T,
) -> [T; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let (iu, frac_u) = split_coord(u);
    let (iv, frac_v) = split_coord(v);

    let weights_u = cubic_weights(frac_u);
    let weights_v = cubic_weights(frac_v);

    let taps_u = TAP_OFFSETS.map(|offset| tap(iu, offset, cols));
    let taps_v = TAP_OFFSETS.map(|offset| tap(iv, offset, rows));

    let mut pixel = [T::zero(); C];
    for (&row, &wv) in taps_v.iter().zip(weights_v.iter()) {
        // horizontal pass over one tap row
        let mut row_val = [T::zero(); C];
        for (&col, &wu) in taps_u.iter().zip(weights_u.iter()) {
            let p = pixel_at(image, row, col);
            for k in 0..C {
                row_val[k] = row_val[k] + wu * p[k];
            }
        }

        for k in 0..C {
            pixel[k] = pixel[k] + wv * row_val[k];
        }
    }

    pixel
}
