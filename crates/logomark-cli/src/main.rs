//! Command-line driver: decode an image, preprocess it, detect logo
//! instances, draw their boxes on the original and write it back out.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use logomark_core::{init_with_level, BoundingBox, ColorImage, Rgba};
use logomark_detect::{LogoDetector, LogoDetectorParams, LogoParamsError};
use logomark_filters::{preprocess, ColorReplacement};

#[derive(Parser)]
#[command(
    name = "logomark",
    about = "Locate the compound logo mark in a photograph",
    version
)]
struct Cli {
    /// Input image (any format the `image` crate decodes).
    input: PathBuf,

    /// Annotated output image; defaults to `<input>.detected.png`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file with detector parameter overrides.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Skip the preprocessing chain (for already-normalized images).
    #[arg(long)]
    no_preprocess: bool,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error("malformed parameter file: {0}")]
    Params(#[from] serde_json::Error),
    #[error(transparent)]
    Detector(#[from] LogoParamsError),
    #[error("decoded buffer size mismatch")]
    BufferSize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let _ = init_with_level(level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    // Parameters are validated before any pixel data is touched.
    let params = load_params(cli.params.as_deref())?;
    let detector = LogoDetector::new(params)?;

    let decoded = image::ImageReader::open(&cli.input)
        .map_err(|source| CliError::Read {
            path: cli.input.clone(),
            source,
        })?
        .decode()?
        .to_rgba8();
    let original = ColorImage::from_rgba_bytes(
        decoded.width() as usize,
        decoded.height() as usize,
        decoded.as_raw(),
    )
    .ok_or(CliError::BufferSize)?;

    let processed = if cli.no_preprocess {
        original.clone()
    } else {
        let replacement = ColorReplacement::new(Rgba::BLACK)
            .with_criterion(detector.params().blue_classifier()?)
            .with_criterion(detector.params().orange_classifier()?);
        preprocess(&original.as_view(), &replacement)
    };

    let result = detector.detect(&processed.as_view());

    let mut annotated = original;
    for instance in &result.instances {
        draw_border(&mut annotated, &instance.bounding_box, Rgba::CYAN);
    }

    let out_path = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension("detected.png"));
    save(&annotated, &out_path)?;
    log::debug!("annotated image written to {}", out_path.display());

    println!(
        "found {} logo instance(s) in {}",
        result.instances.len(),
        cli.input.display()
    );
    for (idx, instance) in result.instances.iter().enumerate() {
        let b = instance.bounding_box;
        println!(
            "  #{idx}: ({}, {}) .. ({}, {})",
            b.min.x, b.min.y, b.max.x, b.max.y
        );
    }
    Ok(())
}

fn load_params(path: Option<&Path>) -> Result<LogoDetectorParams, CliError> {
    match path {
        None => Ok(LogoDetectorParams::default()),
        Some(p) => {
            let text = std::fs::read_to_string(p).map_err(|source| CliError::Read {
                path: p.to_path_buf(),
                source,
            })?;
            Ok(serde_json::from_str(&text)?)
        }
    }
}

/// 1-pixel border along the box, clamped to the image.
fn draw_border(img: &mut ColorImage, bbox: &BoundingBox, color: Rgba) {
    if img.width == 0 || img.height == 0 {
        return;
    }
    let x0 = bbox.min.x.clamp(0, img.width as i32 - 1) as usize;
    let x1 = bbox.max.x.clamp(0, img.width as i32 - 1) as usize;
    let y0 = bbox.min.y.clamp(0, img.height as i32 - 1) as usize;
    let y1 = bbox.max.y.clamp(0, img.height as i32 - 1) as usize;

    for x in x0..=x1 {
        img.set(x, y0, color);
        img.set(x, y1, color);
    }
    for y in y0..=y1 {
        img.set(x0, y, color);
        img.set(x1, y, color);
    }
}

fn save(img: &ColorImage, path: &Path) -> Result<(), CliError> {
    let buf = image::RgbaImage::from_raw(
        img.width as u32,
        img.height as u32,
        img.to_rgba_bytes(),
    )
    .ok_or(CliError::BufferSize)?;
    buf.save(path)?;
    Ok(())
}
