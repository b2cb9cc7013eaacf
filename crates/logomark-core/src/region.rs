use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Integer pixel coordinate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PixelCoord {
    pub x: i32,
    pub y: i32,
}

impl PixelCoord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        PixelCoord { x, y }
    }
}

/// Inclusive axis-aligned bounding box.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: PixelCoord,
    pub max: PixelCoord,
}

impl BoundingBox {
    /// Degenerate box covering a single pixel.
    pub const fn at(p: PixelCoord) -> Self {
        BoundingBox { min: p, max: p }
    }

    /// Grow to include `p`.
    pub fn include(&mut self, p: PixelCoord) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Extent along x (`max.x - min.x`).
    #[inline]
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    /// Extent along y (`max.y - min.y`).
    #[inline]
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Integer midpoint of the box.
    pub fn center(&self) -> PixelCoord {
        PixelCoord::new(self.min.x + self.width() / 2, self.min.y + self.height() / 2)
    }

    /// Midpoint as a real point, for distance computations.
    pub fn center_point(&self) -> Point2<f64> {
        let c = self.center();
        Point2::new(f64::from(c.x), f64::from(c.y))
    }

    /// True when `other` lies strictly inside on all four sides.
    pub fn strictly_contains(&self, other: &BoundingBox) -> bool {
        self.min.x < other.min.x
            && self.min.y < other.min.y
            && self.max.x > other.max.x
            && self.max.y > other.max.y
    }
}

/// A 4-connected set of same-class pixels with its bounding box.
///
/// Regions are produced by segmentation and immutable afterwards. The box is
/// grown incrementally as pixels are collected, so it is always the tightest
/// box containing every member pixel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Region {
    pixels: Vec<PixelCoord>,
    bbox: BoundingBox,
}

impl Region {
    /// Build from a non-empty pixel list; `None` for an empty one.
    pub fn from_pixels(pixels: Vec<PixelCoord>) -> Option<Self> {
        let first = *pixels.first()?;
        let mut bbox = BoundingBox::at(first);
        for p in &pixels[1..] {
            bbox.include(*p);
        }
        Some(Region { pixels, bbox })
    }

    #[inline]
    pub fn pixels(&self) -> &[PixelCoord] {
        &self.pixels
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bbox_is_tight() {
        let pixels = vec![
            PixelCoord::new(5, 7),
            PixelCoord::new(2, 9),
            PixelCoord::new(8, 3),
        ];
        let region = Region::from_pixels(pixels).expect("non-empty");
        let bbox = region.bounding_box();
        assert_eq!(bbox.min, PixelCoord::new(2, 3));
        assert_eq!(bbox.max, PixelCoord::new(8, 9));
    }

    #[test]
    fn empty_pixel_list_yields_no_region() {
        assert!(Region::from_pixels(Vec::new()).is_none());
    }

    #[test]
    fn center_truncates_like_integer_division() {
        let bbox = BoundingBox {
            min: PixelCoord::new(0, 0),
            max: PixelCoord::new(5, 9),
        };
        assert_eq!(bbox.center(), PixelCoord::new(2, 4));
    }

    #[test]
    fn containment_is_strict() {
        let outer = BoundingBox {
            min: PixelCoord::new(0, 0),
            max: PixelCoord::new(10, 10),
        };
        let inner = BoundingBox {
            min: PixelCoord::new(1, 1),
            max: PixelCoord::new(9, 9),
        };
        assert!(outer.strictly_contains(&inner));
        assert!(!outer.strictly_contains(&outer));
        assert!(!inner.strictly_contains(&outer));

        // Sharing one edge is not strict containment.
        let flush = BoundingBox {
            min: PixelCoord::new(0, 1),
            max: PixelCoord::new(9, 9),
        };
        assert!(!outer.strictly_contains(&flush));
    }
}
