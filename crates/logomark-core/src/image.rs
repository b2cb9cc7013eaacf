use crate::color::Rgba;

/// Borrowed row-major RGBA image, `data.len() == width * height`.
#[derive(Clone, Copy, Debug)]
pub struct ColorImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [Rgba],
}

impl ColorImageView<'_> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.data[y * self.width + x]
    }

    /// Copy into an owned image.
    pub fn to_owned_image(&self) -> ColorImage {
        ColorImage {
            width: self.width,
            height: self.height,
            data: self.data.to_vec(),
        }
    }
}

/// Owned row-major RGBA image.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<Rgba>,
}

impl ColorImage {
    /// Image of the given size with every pixel set to `fill`.
    pub fn filled(width: usize, height: usize, fill: Rgba) -> Self {
        ColorImage {
            width,
            height,
            data: vec![fill; width * height],
        }
    }

    /// Build from packed RGBA bytes (4 per pixel, row-major), e.g. a decoded
    /// PNG buffer. Returns `None` on a size mismatch.
    pub fn from_rgba_bytes(width: usize, height: usize, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != width * height * 4 {
            return None;
        }
        let data = bytes
            .chunks_exact(4)
            .map(|px| Rgba::with_alpha(px[0], px[1], px[2], px[3]))
            .collect();
        Some(ColorImage {
            width,
            height,
            data,
        })
    }

    /// Packed RGBA bytes, row-major, 4 per pixel.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 4);
        for px in &self.data {
            out.extend_from_slice(&[px.r, px.g, px.b, px.a]);
        }
        out
    }

    #[inline]
    pub fn as_view(&self) -> ColorImageView<'_> {
        ColorImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Rgba) {
        self.data[y * self.width + x] = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_round_trip() {
        let mut img = ColorImage::filled(3, 2, Rgba::BLACK);
        img.set(1, 0, Rgba::new(10, 20, 30));
        img.set(2, 1, Rgba::with_alpha(1, 2, 3, 4));

        let bytes = img.to_rgba_bytes();
        assert_eq!(bytes.len(), 3 * 2 * 4);

        let back = ColorImage::from_rgba_bytes(3, 2, &bytes).expect("matching size");
        assert_eq!(back, img);
    }

    #[test]
    fn from_bytes_rejects_wrong_length() {
        assert!(ColorImage::from_rgba_bytes(2, 2, &[0u8; 15]).is_none());
    }

    #[test]
    fn view_indexing_is_row_major() {
        let mut img = ColorImage::filled(4, 3, Rgba::BLACK);
        img.set(3, 2, Rgba::WHITE);
        let view = img.as_view();
        assert_eq!(view.get(3, 2), Rgba::WHITE);
        assert_eq!(view.data[2 * 4 + 3], Rgba::WHITE);
    }
}
