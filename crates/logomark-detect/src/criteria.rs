use nalgebra::distance;
use serde::{Deserialize, Serialize};

use logomark_core::Region;

use crate::moments::MomentSet;

/// Closed numeric range for one shape descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DescriptorRange {
    pub min: f64,
    pub max: f64,
}

impl DescriptorRange {
    pub const fn new(min: f64, max: f64) -> Self {
        DescriptorRange { min, max }
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Acceptance window over the two invariant descriptors.
///
/// A region matches only when both M1 and M7 fall inside their ranges.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeCriterion {
    pub m1: DescriptorRange,
    pub m7: DescriptorRange,
}

impl ShapeCriterion {
    pub fn matches(&self, moments: &MomentSet) -> bool {
        self.m1.contains(moments.m1()) && self.m7.contains(moments.m7())
    }
}

/// Pairwise spatial predicates over region bounding boxes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpatialCriterion {
    /// The first box strictly contains the second on all four sides.
    StrictlyContains,
    /// The center distance is at most the *first* box's width.
    WithinOwnWidth,
}

impl SpatialCriterion {
    pub fn matches(&self, a: &Region, b: &Region) -> bool {
        let (box_a, box_b) = (a.bounding_box(), b.bounding_box());
        match self {
            SpatialCriterion::StrictlyContains => box_a.strictly_contains(&box_b),
            SpatialCriterion::WithinOwnWidth => {
                distance(&box_a.center_point(), &box_b.center_point())
                    <= f64::from(box_a.width())
            }
        }
    }
}
