use logomark_core::{PixelCoord, Region};

/// Raw and central geometric moments of one region, with the two invariant
/// shape descriptors consumed by shape criteria.
///
/// Raw moments cover every `m[i][j]` with i, j ≤ 2, which includes the two
/// order-3 cross moments m21 and m12 exposed through [`MomentSet::central`].
#[derive(Clone, Copy, Debug)]
pub struct MomentSet {
    m: [[f64; 3]; 3],
    mu: [[f64; 3]; 3],
    centroid: PixelCoord,
}

impl MomentSet {
    /// Compute the moments of `region`.
    ///
    /// Returns `None` when the region has no pixels; m00 would be zero and
    /// nothing below is defined.
    pub fn of_region(region: &Region) -> Option<MomentSet> {
        Self::of_pixels(region.pixels())
    }

    /// Compute moments over a raw pixel list.
    pub fn of_pixels(pixels: &[PixelCoord]) -> Option<MomentSet> {
        if pixels.is_empty() {
            return None;
        }

        let mut m = [[0.0f64; 3]; 3];
        for p in pixels {
            let (x, y) = (f64::from(p.x), f64::from(p.y));
            let mut x_power = 1.0;
            for row in &mut m {
                let mut term = x_power;
                for cell in row.iter_mut() {
                    *cell += term;
                    term *= y;
                }
                x_power *= x;
            }
        }

        // Centroid truncated to integer pixel coordinates; the truncated
        // values also feed the third-order central moments below.
        let cx = (m[1][0] / m[0][0]).trunc();
        let cy = (m[0][1] / m[0][0]).trunc();
        let centroid = PixelCoord::new(cx as i32, cy as i32);

        let mut mu = [[0.0f64; 3]; 3];
        mu[0][0] = m[0][0];
        mu[1][1] = m[1][1] - m[1][0] * m[0][1] / m[0][0];
        mu[2][0] = m[2][0] - m[1][0] * m[1][0] / m[0][0];
        mu[0][2] = m[0][2] - m[0][1] * m[0][1] / m[0][0];
        // Reduced third-order forms; the tuned descriptor ranges assume
        // exactly these, so they stay as-is.
        mu[2][1] = m[2][1] - 2.0 * m[1][1] * cx - m[2][0] * cy + 2.0 * m[0][1] * cx * cx;
        mu[1][2] = m[1][2] - 2.0 * m[1][1] * cy - m[0][2] * cx + 2.0 * m[1][0] * cy * cy;

        Some(MomentSet { m, mu, centroid })
    }

    /// Raw moment `m[i][j] = Σ xⁱ·yʲ` over the region pixels, i, j ≤ 2.
    #[inline]
    pub fn raw(&self, i: usize, j: usize) -> f64 {
        self.m[i][j]
    }

    /// Central moment `μ[i][j]` for the combinations computed here
    /// (μ00, μ11, μ20, μ02, μ21, μ12; the rest are zero).
    #[inline]
    pub fn central(&self, i: usize, j: usize) -> f64 {
        self.mu[i][j]
    }

    /// Region centroid, truncated to integer pixel coordinates.
    #[inline]
    pub fn centroid(&self) -> PixelCoord {
        self.centroid
    }

    /// `(μ20 + μ02) / m00²` — compactness/elongation indicator.
    pub fn m1(&self) -> f64 {
        (self.mu[2][0] + self.mu[0][2]) / (self.m[0][0] * self.m[0][0])
    }

    /// `(μ20·μ02 − μ11²) / m00⁴` — separates circular from elongated or
    /// angular shapes.
    pub fn m7(&self) -> f64 {
        let m00_sq = self.m[0][0] * self.m[0][0];
        (self.mu[2][0] * self.mu[0][2] - self.mu[1][1] * self.mu[1][1]) / (m00_sq * m00_sq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn disk(cx: i32, cy: i32, radius: i32) -> Vec<PixelCoord> {
        let mut pixels = Vec::new();
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    pixels.push(PixelCoord::new(cx + dx, cy + dy));
                }
            }
        }
        pixels
    }

    fn rectangle(x0: i32, y0: i32, width: i32, height: i32) -> Vec<PixelCoord> {
        let mut pixels = Vec::new();
        for y in y0..y0 + height {
            for x in x0..x0 + width {
                pixels.push(PixelCoord::new(x, y));
            }
        }
        pixels
    }

    #[test]
    fn m00_counts_pixels() {
        let pixels = rectangle(3, 4, 6, 5);
        let moments = MomentSet::of_pixels(&pixels).expect("non-empty");
        assert_eq!(moments.raw(0, 0) as usize, pixels.len());
    }

    #[test]
    fn centroid_of_a_symmetric_rectangle() {
        let moments = MomentSet::of_pixels(&rectangle(10, 20, 5, 3)).expect("non-empty");
        assert_eq!(moments.centroid(), PixelCoord::new(12, 21));
    }

    #[test]
    fn empty_input_has_no_moments() {
        assert!(MomentSet::of_pixels(&[]).is_none());
    }

    #[test]
    fn descriptors_are_translation_invariant() {
        let base = MomentSet::of_pixels(&disk(30, 30, 12)).expect("non-empty");
        let shifted_pixels: Vec<PixelCoord> = disk(30, 30, 12)
            .iter()
            .map(|p| PixelCoord::new(p.x + 7, p.y + 13))
            .collect();
        let shifted = MomentSet::of_pixels(&shifted_pixels).expect("non-empty");

        assert_relative_eq!(base.m1(), shifted.m1(), max_relative = 1e-9);
        assert_relative_eq!(base.m7(), shifted.m7(), max_relative = 1e-9);
    }

    #[test]
    fn disk_descriptors_sit_on_the_analytic_values() {
        // Continuous disk: M1 = 1/(2π), M7 = 1/(16π²). Discretization moves
        // both by well under 2 % at this radius.
        let moments = MomentSet::of_pixels(&disk(50, 50, 20)).expect("non-empty");
        assert_relative_eq!(
            moments.m1(),
            1.0 / (2.0 * std::f64::consts::PI),
            max_relative = 0.02
        );
        assert_relative_eq!(
            moments.m7(),
            1.0 / (16.0 * std::f64::consts::PI * std::f64::consts::PI),
            max_relative = 0.02
        );
    }

    #[test]
    fn elongated_rectangle_falls_below_the_circle_band() {
        // Discrete 40x10 rectangle: M1 = ((W²−1) + (H²−1)) / (12·W·H).
        let moments = MomentSet::of_pixels(&rectangle(0, 0, 40, 10)).expect("non-empty");
        let expected = (40.0f64 * 40.0 - 1.0 + 10.0 * 10.0 - 1.0) / (12.0 * 400.0);
        assert_relative_eq!(moments.m1(), expected, max_relative = 1e-12);
        assert!(moments.m1() < 0.5);
    }

    #[test]
    fn reduced_third_order_moments_match_the_closed_form() {
        // For an axis-aligned rectangle every odd central moment vanishes in
        // the standard definition; the reduced form keeps a residue that the
        // closed-form expression below reproduces.
        let pixels = rectangle(2, 3, 7, 4);
        let moments = MomentSet::of_pixels(&pixels).expect("non-empty");

        let m00 = moments.raw(0, 0);
        let cx = (moments.raw(1, 0) / m00).trunc();
        let cy = (moments.raw(0, 1) / m00).trunc();
        let expected_mu21 = moments.raw(2, 1) - 2.0 * moments.raw(1, 1) * cx
            - moments.raw(2, 0) * cy
            + 2.0 * moments.raw(0, 1) * cx * cx;
        assert_relative_eq!(moments.central(2, 1), expected_mu21, max_relative = 1e-12);
    }
}
