use criterion::{criterion_group, criterion_main, Criterion};

use logomark_core::{ColorCriterion, ColorImage, Hsb, Rgba};
use logomark_detect::{extract_regions, LogoDetector, LogoDetectorParams};

fn synthetic_scene(width: usize, height: usize) -> ColorImage {
    let blue = Hsb::new(225.0, 0.80, 0.50).to_rgba();
    let orange = Hsb::new(20.0, 0.80, 0.65).to_rgba();

    let mut img = ColorImage::filled(width, height, Rgba::BLACK);
    let (cx, cy) = (width as i32 / 2, height as i32 / 2);

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let d2 = (x - cx) * (x - cx) + (y - cy) * (y - cy);
            if (576..=900).contains(&d2) {
                img.set(x as usize, y as usize, blue);
            } else if d2 <= 64 {
                img.set(x as usize, y as usize, orange);
            }
        }
    }
    img
}

fn bench_segmentation(c: &mut Criterion) {
    let img = synthetic_scene(320, 240);
    let blue = ColorCriterion::Exact(Hsb::new(225.0, 0.80, 0.50).to_rgba());

    c.bench_function("segment_320x240", |b| {
        b.iter(|| extract_regions(&img.as_view(), &blue, 150))
    });
}

fn bench_full_detection(c: &mut Criterion) {
    let img = synthetic_scene(320, 240);
    let detector = LogoDetector::new(LogoDetectorParams::default()).expect("default params");

    c.bench_function("detect_320x240", |b| b.iter(|| detector.detect(&img.as_view())));
}

criterion_group!(benches, bench_segmentation, bench_full_detection);
criterion_main!(benches);
