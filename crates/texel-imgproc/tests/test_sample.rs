use approx::assert_relative_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

use texel_image::{Image, ImageSize};
use texel_imgproc::interpolation::{
    grid::grid_queries, sample, sample_by_name, sample_into, sample_with, InterpolationError,
    InterpolationMode,
};
use texel_imgproc::parallel::ExecutionStrategy;
use texel_tensor::Tensor2;

const MODES: [InterpolationMode; 3] = [
    InterpolationMode::Nearest,
    InterpolationMode::Bilinear,
    InterpolationMode::Bicubic,
];

fn random_image<const C: usize>(
    height: usize,
    width: usize,
    seed: u64,
) -> Result<Image<u8, C>, InterpolationError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..height * width * C).map(|_| rng.random::<u8>()).collect();
    Ok(Image::new(ImageSize { width, height }, data)?)
}

fn random_queries(n: usize, lo: f64, hi: f64, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = (0..n).map(|_| rng.random_range(lo..hi)).collect();
    let cols = (0..n).map(|_| rng.random_range(lo..hi)).collect();
    (rows, cols)
}

#[test]
fn grid_aligned_queries_are_exact() -> Result<(), InterpolationError> {
    let image = random_image::<3>(7, 9, 1)?.cast::<f64>()?;
    let (rows, cols) = grid_queries::<f64>(0..7, 0..9)?;

    for mode in MODES {
        let out = sample(&image, &rows, &cols, mode)?;
        assert_eq!(out.as_slice(), image.as_slice(), "mode {mode}");
    }
    Ok(())
}

#[test]
fn output_follows_query_order() -> Result<(), InterpolationError> {
    let image = random_image::<2>(12, 10, 2)?.cast::<f32>()?;
    let (rows, cols) = random_queries(64, -3.0, 14.0, 3);
    let rows: Vec<f32> = rows.iter().map(|&x| x as f32).collect();
    let cols: Vec<f32> = cols.iter().map(|&x| x as f32).collect();

    for mode in MODES {
        let out = sample(&image, &rows, &cols, mode)?;

        // reversing the batch reverses the output rows
        let rows_rev: Vec<f32> = rows.iter().rev().copied().collect();
        let cols_rev: Vec<f32> = cols.iter().rev().copied().collect();
        let out_rev = sample(&image, &rows_rev, &cols_rev, mode)?;

        let n = rows.len();
        for i in 0..n {
            assert_eq!(out.get([i, 0]), out_rev.get([n - 1 - i, 0]));
            assert_eq!(out.get([i, 1]), out_rev.get([n - 1 - i, 1]));
        }

        // each row only depends on its own query
        for i in [0, 17, 63] {
            let single = sample(&image, &rows[i..i + 1], &cols[i..i + 1], mode)?;
            assert_eq!(single.as_slice(), &out.as_slice()[i * 2..i * 2 + 2]);
        }
    }
    Ok(())
}

#[test]
fn out_of_bounds_rows_clamp_to_edge() -> Result<(), InterpolationError> {
    let image = random_image::<3>(6, 6, 4)?.cast::<f64>()?;

    for mode in MODES {
        for col in [0.0, 2.3, 5.0, 7.5] {
            let below = sample(&image, &[-5.0], &[col], mode)?;
            let edge = sample(&image, &[0.0], &[col], mode)?;
            assert_eq!(below, edge, "mode {mode} col {col}");

            let above = sample(&image, &[42.0], &[col], mode)?;
            let last = sample(&image, &[5.0], &[col], mode)?;
            assert_eq!(above, last, "mode {mode} col {col}");
        }
    }
    Ok(())
}

#[test]
fn channels_are_interpolated_independently() -> Result<(), InterpolationError> {
    let image = random_image::<3>(10, 8, 5)?.cast::<f64>()?;
    let channels = image.split_channels()?;
    let (rows, cols) = random_queries(40, -1.5, 11.0, 6);

    for mode in MODES {
        let out = sample(&image, &rows, &cols, mode)?;
        for (k, channel) in channels.iter().enumerate() {
            let single = sample(channel, &rows, &cols, mode)?;
            for i in 0..rows.len() {
                assert_eq!(out.get([i, k]), single.get([i, 0]), "mode {mode}");
            }
        }
    }
    Ok(())
}

#[test]
fn empty_batch_yields_empty_output() -> Result<(), InterpolationError> {
    let image = random_image::<3>(4, 4, 7)?.cast::<f32>()?;
    for mode in MODES {
        let out = sample(&image, &[], &[], mode)?;
        assert_eq!(out.shape, [0, 3]);
        assert!(out.as_slice().is_empty());
    }
    Ok(())
}

#[test]
fn sampling_integer_window_matches_crop() -> Result<(), InterpolationError> {
    let (height, width) = (120, 130);
    let base = random_image::<3>(height, width, 8)?.cast::<f64>()?;

    // crop rows [50, 100) x cols [50, 100) directly from the pixel buffer
    let row_stride = width * 3;
    let expected: Vec<f64> = (50..100)
        .flat_map(|r| {
            let start = r * row_stride + 50 * 3;
            base.as_slice()[start..start + 50 * 3].to_vec()
        })
        .collect();

    let (rows, cols) = grid_queries::<f64>(50..100, 50..100)?;
    assert_eq!(rows.len(), 50 * 50);

    for mode in MODES {
        let out = sample(&base, &rows, &cols, mode)?;
        assert_eq!(out.shape, [2500, 3]);

        let cropped = Image::<f64, 3>::new(
            ImageSize {
                width: 50,
                height: 50,
            },
            out.into_vec(),
        )?;
        assert_eq!(cropped.as_slice(), expected.as_slice(), "mode {mode}");
    }
    Ok(())
}

#[test]
fn invalid_mode_fails_before_sampling() -> Result<(), InterpolationError> {
    let image = random_image::<3>(4, 4, 9)?.cast::<f32>()?;

    let res = sample_by_name(&image, &[1.0], &[1.0], "lanczos");
    assert_eq!(
        res,
        Err(InterpolationError::InvalidMode("lanczos".to_string()))
    );

    // parsing is the only way to reach an unknown mode, so the buffer is never touched
    let mut dst = Tensor2::from_shape_val([1, 3], -1.0f32);
    let res = "area".parse::<InterpolationMode>().and_then(|mode| {
        sample_into(
            &image,
            &[1.0],
            &[1.0],
            mode,
            &mut dst,
            ExecutionStrategy::Serial,
        )
    });
    assert!(matches!(res, Err(InterpolationError::InvalidMode(_))));
    assert_eq!(dst.as_slice(), &[-1.0, -1.0, -1.0]);
    Ok(())
}

#[test]
fn mismatched_coordinates_are_rejected() -> Result<(), InterpolationError> {
    let image = random_image::<1>(4, 4, 10)?.cast::<f32>()?;
    for mode in MODES {
        let res = sample(&image, &[0.0, 1.0, 2.0], &[0.0], mode);
        assert_eq!(
            res,
            Err(InterpolationError::ShapeMismatch { rows: 3, cols: 1 })
        );
    }
    Ok(())
}

#[test]
fn strategies_produce_identical_output() -> Result<(), InterpolationError> {
    let image = random_image::<4>(32, 24, 11)?.cast::<f32>()?;
    let (rows, cols) = random_queries(1000, -4.0, 36.0, 12);
    let rows: Vec<f32> = rows.iter().map(|&x| x as f32).collect();
    let cols: Vec<f32> = cols.iter().map(|&x| x as f32).collect();

    for mode in MODES {
        let expected = sample_with(&image, &rows, &cols, mode, ExecutionStrategy::Serial)?;
        for strategy in [
            ExecutionStrategy::ParallelElements,
            ExecutionStrategy::AutoRows(64),
            ExecutionStrategy::Fixed(3),
        ] {
            let out = sample_with(&image, &rows, &cols, mode, strategy)?;
            assert_eq!(out, expected, "mode {mode} strategy {strategy:?}");
        }
    }
    Ok(())
}

#[test]
fn off_grid_values() -> Result<(), InterpolationError> {
    // f(r, c) = r * 10 + c
    let data: Vec<f64> = (0..5)
        .flat_map(|r| (0..5).map(move |c| (r * 10 + c) as f64))
        .collect();
    let image = Image::<f64, 1>::new(
        ImageSize {
            width: 5,
            height: 5,
        },
        data,
    )?;

    // every 4x4 stencil stays inside the image
    let rows = [1.25, 2.5, 2.75];
    let cols = [1.5, 1.75, 2.2];

    let nearest = sample(&image, &rows, &cols, InterpolationMode::Nearest)?;
    assert_eq!(nearest.as_slice(), &[12.0, 32.0, 32.0]);

    // both kernels reproduce a linear ramp
    for mode in [InterpolationMode::Bilinear, InterpolationMode::Bicubic] {
        let out = sample(&image, &rows, &cols, mode)?;
        for (i, (r, c)) in rows.iter().zip(cols.iter()).enumerate() {
            let val = out.get([i, 0]).copied().unwrap_or(f64::NAN);
            assert_relative_eq!(val, r * 10.0 + c, epsilon = 1e-9);
        }
    }
    Ok(())
}

#[test]
fn integer_images_are_promoted() -> Result<(), InterpolationError> {
    let image_u8 = random_image::<3>(5, 5, 13)?;
    let image = image_u8.cast::<f32>()?;

    let out = sample(&image, &[2.0, 4.4], &[3.0, 0.0], InterpolationMode::Nearest)?;
    let expected: Vec<f32> = [[2, 3], [4, 0]]
        .iter()
        .flat_map(|&[r, c]| (0..3).map(move |k| [r, c, k]))
        .map(|idx| image_u8.get(idx).map_or(f32::NAN, |&v| v as f32))
        .collect();
    assert_eq!(out.as_slice(), expected.as_slice());
    Ok(())
}

#[test]
fn non_finite_and_huge_rows_pin_to_edge() -> Result<(), InterpolationError> {
    // f(r, c) = r * 4 + c
    let data: Vec<f64> = (0..16).map(|x| x as f64).collect();
    let image = Image::<f64, 1>::new(
        ImageSize {
            width: 4,
            height: 4,
        },
        data,
    )?;

    let rows = [f64::NAN, f64::INFINITY, -1e300, 1e300];
    let cols = [0.5; 4];

    for (mode, expected) in [
        (InterpolationMode::Nearest, [1.0, 13.0, 1.0, 13.0]),
        (InterpolationMode::Bilinear, [0.5, 12.5, 0.5, 12.5]),
        (InterpolationMode::Bicubic, [0.4375, 12.4375, 0.4375, 12.4375]),
    ] {
        let out = sample(&image, &rows, &cols, mode)?;
        assert_eq!(out.as_slice(), &expected, "mode {mode}");
    }
    Ok(())
}

#[test]
fn huge_row_stride_runs_as_one_block() -> Result<(), InterpolationError> {
    let image = random_image::<3>(4, 4, 14)?.cast::<f32>()?;
    let (rows, cols) = ([1.0, 2.5, 3.25], [1.0, 0.5, 2.75]);

    for mode in MODES {
        let expected = sample_with(&image, &rows, &cols, mode, ExecutionStrategy::Serial)?;
        let out = sample_with(
            &image,
            &rows,
            &cols,
            mode,
            ExecutionStrategy::AutoRows(usize::MAX),
        )?;
        assert_eq!(out, expected, "mode {mode}");
    }
    Ok(())
}
