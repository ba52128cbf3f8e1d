use argh::FromArgs;

use texel::image::{Image, ImageSize};
use texel::imgproc::interpolation::{self, grid, InterpolationMode};
use texel::imgproc::parallel::ExecutionStrategy;

#[derive(FromArgs)]
/// Resample a synthetic gradient image and report how it compares with the analytic signal
struct Args {
    /// interpolation mode: nearest, bilinear or bicubic
    #[argh(option, short = 'm', default = "InterpolationMode::default()")]
    mode: InterpolationMode,

    /// width of the source image
    #[argh(option, default = "64")]
    width: usize,

    /// height of the source image
    #[argh(option, default = "48")]
    height: usize,

    /// upscale factor applied to both axes
    #[argh(option, short = 's', default = "4")]
    scale: usize,

    /// run on the current thread only
    #[argh(switch)]
    serial: bool,
}

/// A smooth three channel test signal.
fn signal(r: f64, c: f64) -> [f64; 3] {
    [
        (r * 0.15).sin() * 0.5 + 0.5,
        (c * 0.1).cos() * 0.5 + 0.5,
        ((r + c) * 0.05).sin() * 0.5 + 0.5,
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let src_size = ImageSize {
        width: args.width,
        height: args.height,
    };

    let data = (0..args.height)
        .flat_map(|r| (0..args.width).flat_map(move |c| signal(r as f64, c as f64)))
        .collect();
    let image = Image::<f64, 3>::new(src_size, data)?;

    let dst_size = ImageSize {
        width: args.width * args.scale,
        height: args.height * args.scale,
    };
    let (map_x, map_y) = grid::meshgrid_scaled::<f64>(dst_size, src_size)?;

    let strategy = if args.serial {
        ExecutionStrategy::Serial
    } else {
        ExecutionStrategy::default()
    };

    log::info!("resampling {src_size} to {dst_size} with {}", args.mode);

    let out = interpolation::sample_with(
        &image,
        map_y.as_slice(),
        map_x.as_slice(),
        args.mode,
        strategy,
    )?;

    // compare against the analytic signal at the same coordinates
    let mut max_err = 0.0f64;
    let mut sq_err = 0.0f64;
    for ((pixel, &r), &c) in out
        .as_slice()
        .chunks_exact(3)
        .zip(map_y.as_slice())
        .zip(map_x.as_slice())
    {
        for (v, expected) in pixel.iter().zip(signal(r, c)) {
            let err = (v - expected).abs();
            max_err = max_err.max(err);
            sq_err += err * err;
        }
    }
    let rmse = (sq_err / out.numel().max(1) as f64).sqrt();

    println!(
        "{} x{}: {} samples, max abs error {:.6}, rmse {:.6}",
        args.mode,
        args.scale,
        out.shape[0],
        max_err,
        rmse
    );

    Ok(())
}
