use logomark_core::{ColorImage, ColorImageView, Rgba};

/// 3×3 integer convolution kernel, row-major weights.
#[derive(Clone, Copy, Debug)]
pub struct Kernel3 {
    pub weights: [i32; 9],
}

impl Kernel3 {
    /// High-pass sharpening kernel: strong center, -1 ring.
    pub const fn sharpen() -> Self {
        Kernel3 {
            weights: [-1, -1, -1, -1, 10, -1, -1, -1, -1],
        }
    }

    fn weight_sum(&self) -> i32 {
        self.weights.iter().sum()
    }
}

/// Convolve with `kernel`, normalizing by the weight sum when it is nonzero
/// and clamping each channel. The 1-pixel border is copied unchanged.
pub fn convolve3x3(src: &ColorImageView<'_>, kernel: &Kernel3) -> ColorImage {
    let mut out = src.to_owned_image();
    if src.width < 3 || src.height < 3 {
        return out;
    }

    let sum = kernel.weight_sum();
    for y in 1..src.height - 1 {
        for x in 1..src.width - 1 {
            let mut acc = [0i32; 3];
            let mut k = 0;
            for dy in -1i32..=1 {
                for dx in -1i32..=1 {
                    let c = src.get((x as i32 + dx) as usize, (y as i32 + dy) as usize);
                    let w = kernel.weights[k];
                    acc[0] += i32::from(c.r) * w;
                    acc[1] += i32::from(c.g) * w;
                    acc[2] += i32::from(c.b) * w;
                    k += 1;
                }
            }
            if sum != 0 {
                for channel in &mut acc {
                    *channel /= sum;
                }
            }
            out.set(x, y, Rgba::new(clamp8(acc[0]), clamp8(acc[1]), clamp8(acc[2])));
        }
    }
    out
}

/// Per-channel 3×3 median. The 1-pixel border is copied unchanged.
pub fn median3x3(src: &ColorImageView<'_>) -> ColorImage {
    let mut out = src.to_owned_image();
    if src.width < 3 || src.height < 3 {
        return out;
    }

    let mut r = [0u8; 9];
    let mut g = [0u8; 9];
    let mut b = [0u8; 9];

    for y in 1..src.height - 1 {
        for x in 1..src.width - 1 {
            let mut k = 0;
            for dy in -1i32..=1 {
                for dx in -1i32..=1 {
                    let c = src.get((x as i32 + dx) as usize, (y as i32 + dy) as usize);
                    r[k] = c.r;
                    g[k] = c.g;
                    b[k] = c.b;
                    k += 1;
                }
            }
            r.sort_unstable();
            g.sort_unstable();
            b.sort_unstable();
            out.set(x, y, Rgba::new(r[4], g[4], b[4]));
        }
    }
    out
}

#[inline]
fn clamp8(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_removes_salt_noise() {
        let mut img = ColorImage::filled(5, 5, Rgba::BLACK);
        img.set(2, 2, Rgba::WHITE);
        let out = median3x3(&img.as_view());
        assert_eq!(out.get(2, 2), Rgba::BLACK);
    }

    #[test]
    fn median_preserves_flat_areas() {
        let img = ColorImage::filled(5, 5, Rgba::new(90, 120, 30));
        let out = median3x3(&img.as_view());
        assert_eq!(out, img);
    }

    #[test]
    fn sharpen_keeps_flat_interior() {
        let img = ColorImage::filled(5, 5, Rgba::new(100, 100, 100));
        let out = convolve3x3(&img.as_view(), &Kernel3::sharpen());
        // (10 - 8) * c / 2 == c on constant input.
        assert_eq!(out.get(2, 2), Rgba::new(100, 100, 100));
    }

    #[test]
    fn sharpen_boosts_an_isolated_bright_pixel() {
        let mut img = ColorImage::filled(5, 5, Rgba::new(100, 100, 100));
        img.set(2, 2, Rgba::new(140, 140, 140));
        let out = convolve3x3(&img.as_view(), &Kernel3::sharpen());
        assert!(out.get(2, 2).r > 140);
    }

    #[test]
    fn border_is_copied() {
        let mut img = ColorImage::filled(4, 4, Rgba::new(7, 7, 7));
        img.set(0, 0, Rgba::WHITE);
        let out = convolve3x3(&img.as_view(), &Kernel3::sharpen());
        assert_eq!(out.get(0, 0), Rgba::WHITE);
    }

    #[test]
    fn tiny_images_pass_through() {
        let img = ColorImage::filled(2, 2, Rgba::WHITE);
        assert_eq!(median3x3(&img.as_view()), img);
        assert_eq!(convolve3x3(&img.as_view(), &Kernel3::sharpen()), img);
    }
}
