use serde::{Deserialize, Serialize};

/// 8-bit RGBA color value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255);
    pub const CYAN: Rgba = Rgba::new(0, 255, 255);

    /// Opaque color from RGB channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    /// Convert to hue/saturation/brightness.
    ///
    /// Saturation is `1 - min/max`, brightness is `max`. Achromatic input
    /// maps to hue 0 so the result always satisfies hue ∈ [0, 360).
    pub fn to_hsb(self) -> Hsb {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else if max == r && g >= b {
            60.0 * (g - b) / delta
        } else if max == r {
            60.0 * (g - b) / delta + 360.0
        } else if max == g {
            60.0 * (b - r) / delta + 120.0
        } else {
            60.0 * (r - g) / delta + 240.0
        };

        let saturation = if max == 0.0 { 0.0 } else { 1.0 - min / max };

        Hsb {
            hue,
            saturation,
            brightness: max,
        }
    }
}

/// Hue/saturation/brightness triple.
///
/// Hue in degrees [0, 360), saturation and brightness as fractions in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Hsb {
    pub const fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Hsb {
            hue,
            saturation,
            brightness,
        }
    }

    /// Convert back to an opaque RGB value (sextant algorithm, each channel
    /// rounded half up).
    pub fn to_rgba(self) -> Rgba {
        let s = self.saturation;
        let v = self.brightness;

        if s <= 0.0 {
            let gray = channel(v);
            return Rgba::new(gray, gray, gray);
        }

        let h = (self.hue / 360.0).rem_euclid(1.0) * 6.0;
        let sextant = (h.floor() as u32).min(5);
        let f = h - h.floor();

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sextant {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgba::new(channel(r), channel(g), channel(b))
    }
}

#[inline]
fn channel(x: f64) -> u8 {
    (x * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}
