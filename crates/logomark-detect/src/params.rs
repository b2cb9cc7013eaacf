use serde::{Deserialize, Serialize};

use logomark_core::{CriterionError, Hsb, HsbMargins, HsbNearCriterion};

use crate::criteria::{DescriptorRange, ShapeCriterion};

/// Errors from detector parameter validation.
#[derive(thiserror::Error, Debug)]
pub enum LogoParamsError {
    #[error(transparent)]
    Criterion(#[from] CriterionError),
    #[error("{descriptor} range has min {min} > max {max}")]
    InvertedRange {
        descriptor: &'static str,
        min: f64,
        max: f64,
    },
    #[error("minimum region size must be at least 1")]
    ZeroMinRegionSize,
}

/// Tuned configuration of the logo detector.
///
/// Reference saturation/brightness are fractions in [0, 1]; margins carry
/// the raw degree/percent figures they were tuned with (see [`HsbMargins`]).
/// Every field has a working default, so partial JSON overrides work.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoDetectorParams {
    /// Reference blue shared by the outer circle and the "L".
    pub blue: Hsb,
    /// Reference orange of the small filled circle.
    pub orange: Hsb,
    /// Classification margins around both reference colors.
    pub margins: HsbMargins,
    /// Segmentation discards regions at or below this pixel count.
    pub min_region_size: usize,
    /// Shape window for the outer blue circle.
    pub blue_circle: ShapeCriterion,
    /// Shape window for the blue "L".
    pub blue_l: ShapeCriterion,
    /// Shape window for the orange circle.
    pub orange_circle: ShapeCriterion,
}

impl Default for LogoDetectorParams {
    fn default() -> Self {
        LogoDetectorParams {
            blue: Hsb::new(225.0, 0.80, 0.50),
            orange: Hsb::new(20.0, 0.80, 0.65),
            margins: HsbMargins::default(),
            min_region_size: 150,
            blue_circle: ShapeCriterion {
                m1: DescriptorRange::new(0.50, 1.1),
                m7: DescriptorRange::new(0.1, 0.4),
            },
            blue_l: ShapeCriterion {
                m1: DescriptorRange::new(0.30, 0.6),
                m7: DescriptorRange::new(0.003, 0.05),
            },
            orange_circle: ShapeCriterion {
                m1: DescriptorRange::new(0.16, 0.27),
                m7: DescriptorRange::new(0.005, 0.015),
            },
        }
    }
}

impl LogoDetectorParams {
    /// Reject malformed configuration before any pixel is processed.
    pub fn validate(&self) -> Result<(), LogoParamsError> {
        if self.min_region_size == 0 {
            return Err(LogoParamsError::ZeroMinRegionSize);
        }
        let ranges = [
            ("blue circle M1", self.blue_circle.m1),
            ("blue circle M7", self.blue_circle.m7),
            ("blue L M1", self.blue_l.m1),
            ("blue L M7", self.blue_l.m7),
            ("orange circle M1", self.orange_circle.m1),
            ("orange circle M7", self.orange_circle.m7),
        ];
        for (descriptor, range) in ranges {
            if range.min > range.max {
                return Err(LogoParamsError::InvertedRange {
                    descriptor,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        // Margins and reference components are validated by criterion
        // construction.
        self.blue_classifier()?;
        self.orange_classifier()?;
        Ok(())
    }

    /// HSB proximity classifier for the blue reference color.
    pub fn blue_classifier(&self) -> Result<HsbNearCriterion, LogoParamsError> {
        Ok(HsbNearCriterion::new(self.blue, self.margins)?)
    }

    /// HSB proximity classifier for the orange reference color.
    pub fn orange_classifier(&self) -> Result<HsbNearCriterion, LogoParamsError> {
        Ok(HsbNearCriterion::new(self.orange, self.margins)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        LogoDetectorParams::default().validate().expect("defaults");
    }

    #[test]
    fn inverted_range_is_rejected() {
        let mut params = LogoDetectorParams::default();
        params.blue_l.m7 = DescriptorRange::new(0.05, 0.003);
        assert!(matches!(
            params.validate(),
            Err(LogoParamsError::InvertedRange {
                descriptor: "blue L M7",
                ..
            })
        ));
    }

    #[test]
    fn zero_min_region_size_is_rejected() {
        let mut params = LogoDetectorParams::default();
        params.min_region_size = 0;
        assert!(matches!(
            params.validate(),
            Err(LogoParamsError::ZeroMinRegionSize)
        ));
    }

    #[test]
    fn bad_margins_are_rejected() {
        let mut params = LogoDetectorParams::default();
        params.margins.hue_deg = -3.0;
        assert!(matches!(
            params.validate(),
            Err(LogoParamsError::Criterion(_))
        ));
    }

    #[test]
    fn json_round_trip_preserves_params() {
        let params = LogoDetectorParams::default();
        let json = serde_json::to_string(&params).expect("serialize");
        let back: LogoDetectorParams = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, params);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let back: LogoDetectorParams =
            serde_json::from_str(r#"{"min_region_size": 99}"#).expect("deserialize");
        assert_eq!(back.min_region_size, 99);
        assert_eq!(back.blue, LogoDetectorParams::default().blue);
    }
}
