use logomark_core::{ColorImage, ColorImageView, Rgba};

/// Rec. 601 luma of a color, in [0, 255].
#[inline]
pub(crate) fn luma(c: Rgba) -> u8 {
    (0.299 * f64::from(c.r) + 0.587 * f64::from(c.g) + 0.114 * f64::from(c.b)) as u8
}

#[inline]
fn clamp_channel(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

fn map_pixels(src: &ColorImageView<'_>, f: impl Fn(Rgba) -> Rgba) -> ColorImage {
    ColorImage {
        width: src.width,
        height: src.height,
        data: src.data.iter().map(|&c| f(c)).collect(),
    }
}

/// Replace every pixel with its luma gray.
pub fn grayscale(src: &ColorImageView<'_>) -> ColorImage {
    map_pixels(src, |c| {
        let g = luma(c);
        Rgba::new(g, g, g)
    })
}

/// Channel-wise negative.
pub fn negate(src: &ColorImageView<'_>) -> ColorImage {
    map_pixels(src, |c| Rgba::new(255 - c.r, 255 - c.g, 255 - c.b))
}

/// `channel * contrast + brightness`, clamped per channel.
pub fn adjust_brightness_contrast(
    src: &ColorImageView<'_>,
    brightness: i32,
    contrast: f64,
) -> ColorImage {
    map_pixels(src, |c| {
        let adjust = |ch: u8| clamp_channel(f64::from(ch) * contrast + f64::from(brightness));
        Rgba::new(adjust(c.r), adjust(c.g), adjust(c.b))
    })
}

/// Shift saturation by `delta` in HSB space, clamping to [0, 1].
pub fn shift_saturation(src: &ColorImageView<'_>, delta: f64) -> ColorImage {
    map_pixels(src, |c| {
        let mut hsb = c.to_hsb();
        hsb.saturation = (hsb.saturation + delta).clamp(0.0, 1.0);
        hsb.to_rgba()
    })
}

/// Binarize on a closed luma window: white inside [low, high], black outside.
pub fn threshold_luma(src: &ColorImageView<'_>, low: u8, high: u8) -> ColorImage {
    map_pixels(src, |c| {
        let g = luma(c);
        if g >= low && g <= high {
            Rgba::WHITE
        } else {
            Rgba::BLACK
        }
    })
}
