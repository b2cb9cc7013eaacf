use logomark_core::{ColorImage, ColorImageView, HsbNearCriterion, Rgba};

/// HSB color normalization.
///
/// Each pixel takes the reference color of the first criterion it matches;
/// pixels matching none become the fallback color. Running this ahead of
/// segmentation turns fuzzy photograph colors into exact, classifiable ones.
#[derive(Clone, Debug)]
pub struct ColorReplacement {
    criteria: Vec<HsbNearCriterion>,
    fallback: Rgba,
}

impl ColorReplacement {
    pub fn new(fallback: Rgba) -> Self {
        ColorReplacement {
            criteria: Vec::new(),
            fallback,
        }
    }

    /// Append a criterion; earlier criteria win on overlap.
    pub fn with_criterion(mut self, criterion: HsbNearCriterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    pub fn push(&mut self, criterion: HsbNearCriterion) {
        self.criteria.push(criterion);
    }

    #[inline]
    pub fn fallback(&self) -> Rgba {
        self.fallback
    }

    pub fn apply(&self, src: &ColorImageView<'_>) -> ColorImage {
        let data = src
            .data
            .iter()
            .map(|&px| {
                self.criteria
                    .iter()
                    .find(|criterion| criterion.matches(px))
                    .map(|criterion| criterion.reference().to_rgba())
                    .unwrap_or(self.fallback)
            })
            .collect();
        ColorImage {
            width: src.width,
            height: src.height,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logomark_core::{Hsb, HsbMargins};

    #[test]
    fn normalizes_matching_pixels_and_drops_the_rest() {
        let reference = Hsb::new(20.0, 0.80, 0.65);
        let criterion =
            HsbNearCriterion::new(reference, HsbMargins::default()).expect("valid criterion");
        let replacement = ColorReplacement::new(Rgba::BLACK).with_criterion(criterion);

        let mut img = ColorImage::filled(2, 1, Rgba::WHITE);
        // A color close to the reference, but not equal to it.
        img.set(0, 0, Hsb::new(25.0, 0.75, 0.60).to_rgba());

        let out = replacement.apply(&img.as_view());
        assert_eq!(out.get(0, 0), reference.to_rgba());
        assert_eq!(out.get(1, 0), Rgba::BLACK);
    }

    #[test]
    fn first_matching_criterion_wins() {
        let tight = HsbNearCriterion::new(
            Hsb::new(100.0, 0.5, 0.5),
            HsbMargins {
                hue_deg: 5.0,
                saturation_pct: 10.0,
                brightness_pct: 10.0,
            },
        )
        .expect("valid criterion");
        let loose = HsbNearCriterion::new(Hsb::new(110.0, 0.5, 0.5), HsbMargins::default())
            .expect("valid criterion");
        let replacement = ColorReplacement::new(Rgba::BLACK)
            .with_criterion(tight)
            .with_criterion(loose);

        let img = ColorImage::filled(1, 1, Hsb::new(101.0, 0.5, 0.5).to_rgba());
        let out = replacement.apply(&img.as_view());
        assert_eq!(out.get(0, 0), tight.reference().to_rgba());
    }
}
