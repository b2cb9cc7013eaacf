//! Detect the logo mark in an image file and print the instances.
//!
//! Usage: cargo run --example detect_logo -- photo.png

use image::ImageReader;

use logomark_core::{ColorImage, Rgba};
use logomark_detect::{LogoDetector, LogoDetectorParams};
use logomark_filters::{preprocess, ColorReplacement};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: detect_logo <image>")?;

    let decoded = ImageReader::open(&path)?.decode()?.to_rgba8();
    let img = ColorImage::from_rgba_bytes(
        decoded.width() as usize,
        decoded.height() as usize,
        decoded.as_raw(),
    )
    .ok_or("decoded buffer size mismatch")?;

    let params = LogoDetectorParams::default();
    let detector = LogoDetector::new(params)?;

    let replacement = ColorReplacement::new(Rgba::BLACK)
        .with_criterion(detector.params().blue_classifier()?)
        .with_criterion(detector.params().orange_classifier()?);
    let processed = preprocess(&img.as_view(), &replacement);

    let result = detector.detect(&processed.as_view());
    println!("{} logo instance(s) in {path}", result.instances.len());
    for (idx, instance) in result.instances.iter().enumerate() {
        let b = instance.bounding_box;
        println!(
            "  #{idx}: ({}, {}) .. ({}, {})",
            b.min.x, b.min.y, b.max.x, b.max.y
        );
    }

    Ok(())
}
