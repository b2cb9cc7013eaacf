use logomark_core::{ColorCriterion, ColorImageView};

/// Boolean classification grid: true marks pixels matching one color
/// criterion. Derived from an image, consumed by segmentation.
#[derive(Clone, Debug)]
pub struct ClassificationMask {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl ClassificationMask {
    /// Evaluate `criterion` at every pixel.
    pub fn from_image(src: &ColorImageView<'_>, criterion: &ColorCriterion) -> Self {
        let cells = src.data.iter().map(|&px| criterion.matches(px)).collect();
        ClassificationMask {
            width: src.width,
            height: src.height,
            cells,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }

    #[inline]
    pub(crate) fn clear(&mut self, x: usize, y: usize) {
        self.cells[y * self.width + x] = false;
    }

    /// Number of true cells, mostly useful in tests and diagnostics.
    pub fn count_true(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logomark_core::{ColorImage, Rgba};

    #[test]
    fn classifies_exact_color() {
        let target = Rgba::new(10, 20, 30);
        let mut img = ColorImage::filled(4, 4, Rgba::BLACK);
        img.set(1, 2, target);
        img.set(3, 3, target);

        let mask = ClassificationMask::from_image(&img.as_view(), &ColorCriterion::Exact(target));
        assert_eq!(mask.count_true(), 2);
        assert!(mask.get(1, 2));
        assert!(mask.get(3, 3));
        assert!(!mask.get(0, 0));
    }
}
