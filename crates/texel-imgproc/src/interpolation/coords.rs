use num_traits::Float;
use texel_image::Image;

/// Split a coordinate into its integer base cell and the fractional offset.
///
/// The base is `floor(x)` and the offset is `x - floor(x)`, in `[0, 1)`.
/// Coordinates that are not finite or do not fit an `isize` are pinned to the
/// matching edge with a zero offset; NaN lands on the low edge.
#[inline]
pub(crate) fn split_coord<T: Float>(x: T) -> (isize, T) {
    let x0 = x.floor();
    match x0.to_isize() {
        Some(base) => (base, x - x0),
        None if x > T::zero() => (isize::MAX, T::zero()),
        None => (isize::MIN, T::zero()),
    }
}

/// Round a coordinate to the nearest cell index, ties away from zero.
#[inline]
pub(crate) fn round_coord<T: Float>(x: T) -> isize {
    match x.round().to_isize() {
        Some(index) => index,
        None if x > T::zero() => isize::MAX,
        None => isize::MIN,
    }
}

/// Map a raw tap index onto `[0, len - 1]`, replicating the border outward.
///
/// `len` must be at least 1.
#[inline]
pub(crate) fn clamp_index(index: isize, len: usize) -> usize {
    if index <= 0 {
        0
    } else {
        (index as usize).min(len - 1)
    }
}

/// Index of the tap at `offset` cells away from `base`, clamped to the axis.
#[inline]
pub(crate) fn tap(base: isize, offset: isize, len: usize) -> usize {
    clamp_index(base.saturating_add(offset), len)
}

/// Read the `C` channel values of the pixel at `(row, col)`.
///
/// The indices must already be clamped to the image.
#[inline]
pub(crate) fn pixel_at<T, const C: usize>(image: &Image<T, C>, row: usize, col: usize) -> &[T] {
    let base = (row * image.cols() + col) * C;
    &image.as_slice()[base..base + C]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_coord_positive() {
        assert_eq!(split_coord(2.25f32), (2, 0.25));
        assert_eq!(split_coord(3.0f64), (3, 0.0));
    }

    #[test]
    fn split_coord_negative() {
        // floor, not truncation
        assert_eq!(split_coord(-0.25f32), (-1, 0.75));
        assert_eq!(split_coord(-5.0f64), (-5, 0.0));
    }

    #[test]
    fn split_coord_non_finite() {
        assert_eq!(split_coord(f32::INFINITY), (isize::MAX, 0.0));
        assert_eq!(split_coord(f32::NEG_INFINITY), (isize::MIN, 0.0));
        assert_eq!(split_coord(f64::NAN), (isize::MIN, 0.0));
    }

    #[test]
    fn round_coord_ties_away_from_zero() {
        assert_eq!(round_coord(0.5f32), 1);
        assert_eq!(round_coord(1.5f32), 2);
        assert_eq!(round_coord(2.5f64), 3);
        assert_eq!(round_coord(-0.5f64), -1);
        assert_eq!(round_coord(1.49f32), 1);
    }

    #[test]
    fn clamp_index_edges() {
        assert_eq!(clamp_index(-5, 4), 0);
        assert_eq!(clamp_index(0, 4), 0);
        assert_eq!(clamp_index(3, 4), 3);
        assert_eq!(clamp_index(4, 4), 3);
        assert_eq!(clamp_index(isize::MAX, 1), 0);
    }

    #[test]
    fn tap_saturates() {
        assert_eq!(tap(isize::MAX, 2, 10), 9);
        assert_eq!(tap(isize::MIN, -1, 10), 0);
        assert_eq!(tap(0, -1, 10), 0);
        assert_eq!(tap(8, 2, 10), 9);
    }
}
