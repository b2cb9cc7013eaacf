//! Detection pipeline for the compound logo mark: a blue circular outline
//! enclosing a blue "L" and a small orange circle.
//!
//! Stages, in order: pixel classification by HSB proximity, flood-fill
//! segmentation into connected regions, moment-invariant shape filtering
//! into typed candidate pools, and pairwise spatial assembly of candidate
//! triples. Empty pools at any stage mean zero instances, not an error.

mod criteria;
mod detector;
mod mask;
mod moments;
mod params;
mod segment;

pub use criteria::{DescriptorRange, ShapeCriterion, SpatialCriterion};
pub use detector::{LogoDetectionResult, LogoDetector, LogoInstance};
pub use mask::ClassificationMask;
pub use moments::MomentSet;
pub use params::{LogoDetectorParams, LogoParamsError};
pub use segment::{extract_regions, regions_from_mask, SEED_BORDER};
