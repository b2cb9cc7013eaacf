use serde::{Deserialize, Serialize};

use crate::color::{Hsb, Rgba};

/// Errors from criterion construction.
#[derive(thiserror::Error, Debug)]
pub enum CriterionError {
    #[error("negative {component} margin: {value}")]
    NegativeMargin { component: &'static str, value: f64 },
    #[error("{component} margin {value} exceeds 100 %")]
    MarginTooLarge { component: &'static str, value: f64 },
    #[error("reference {component} {value} outside its valid range")]
    ReferenceOutOfRange { component: &'static str, value: f64 },
}

/// Margins for HSB proximity matching.
///
/// Hue in degrees; saturation and brightness in percent. The percent figures
/// are converted to fractions when a criterion is built.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HsbMargins {
    pub hue_deg: f64,
    pub saturation_pct: f64,
    pub brightness_pct: f64,
}

impl Default for HsbMargins {
    fn default() -> Self {
        HsbMargins {
            hue_deg: 25.0,
            saturation_pct: 20.0,
            brightness_pct: 30.0,
        }
    }
}

impl HsbMargins {
    pub fn validate(&self) -> Result<(), CriterionError> {
        if self.hue_deg < 0.0 {
            return Err(CriterionError::NegativeMargin {
                component: "hue",
                value: self.hue_deg,
            });
        }
        for (component, value) in [
            ("saturation", self.saturation_pct),
            ("brightness", self.brightness_pct),
        ] {
            if value < 0.0 {
                return Err(CriterionError::NegativeMargin { component, value });
            }
            if value > 100.0 {
                return Err(CriterionError::MarginTooLarge { component, value });
            }
        }
        Ok(())
    }
}

/// HSB proximity predicate around a reference color.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HsbNearCriterion {
    reference: Hsb,
    hue_margin: f64,
    saturation_margin: f64,
    brightness_margin: f64,
}

impl HsbNearCriterion {
    /// Build from a reference color and margins, validating both.
    pub fn new(reference: Hsb, margins: HsbMargins) -> Result<Self, CriterionError> {
        margins.validate()?;
        validate_reference(&reference)?;
        Ok(HsbNearCriterion {
            reference,
            hue_margin: margins.hue_deg,
            saturation_margin: margins.saturation_pct / 100.0,
            brightness_margin: margins.brightness_pct / 100.0,
        })
    }

    #[inline]
    pub fn reference(&self) -> Hsb {
        self.reference
    }

    /// True when all three HSB distances stay inside their margins.
    ///
    /// Hue distance is the plain absolute difference: 359° and 1° are 358°
    /// apart here, not 2°. The tuned margins assume this.
    pub fn matches(&self, color: Rgba) -> bool {
        let hsb = color.to_hsb();
        if (hsb.hue - self.reference.hue).abs() > self.hue_margin {
            return false;
        }
        if (hsb.brightness - self.reference.brightness).abs() > self.brightness_margin {
            return false;
        }
        (hsb.saturation - self.reference.saturation).abs() <= self.saturation_margin
    }
}

fn validate_reference(reference: &Hsb) -> Result<(), CriterionError> {
    if !(0.0..360.0).contains(&reference.hue) {
        return Err(CriterionError::ReferenceOutOfRange {
            component: "hue",
            value: reference.hue,
        });
    }
    for (component, value) in [
        ("saturation", reference.saturation),
        ("brightness", reference.brightness),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(CriterionError::ReferenceOutOfRange { component, value });
        }
    }
    Ok(())
}

/// Pixel color predicates used for classification and replacement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColorCriterion {
    /// Exact RGBA equality.
    Exact(Rgba),
    /// Anything but the given color.
    Not(Rgba),
    /// HSB proximity around a reference color.
    HsbNear(HsbNearCriterion),
}

impl ColorCriterion {
    pub fn matches(&self, color: Rgba) -> bool {
        match self {
            ColorCriterion::Exact(c) => color == *c,
            ColorCriterion::Not(c) => color != *c,
            ColorCriterion::HsbNear(near) => near.matches(color),
        }
    }
}
