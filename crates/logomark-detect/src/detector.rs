use serde::{Deserialize, Serialize};

use logomark_core::{BoundingBox, ColorCriterion, ColorImageView, Region};

use crate::criteria::{ShapeCriterion, SpatialCriterion};
use crate::moments::MomentSet;
use crate::params::{LogoDetectorParams, LogoParamsError};
use crate::segment::extract_regions;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// One detected logo: indices into the result's candidate pools plus the
/// bounding box of the blue-circle region, which is what gets annotated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoInstance {
    pub blue_circle: usize,
    pub blue_l: usize,
    pub orange_circle: usize,
    pub bounding_box: BoundingBox,
}

/// Detection output: the typed candidate pools and every accepted triple.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogoDetectionResult {
    pub blue_circles: Vec<Region>,
    pub blue_ls: Vec<Region>,
    pub orange_circles: Vec<Region>,
    pub instances: Vec<LogoInstance>,
}

/// Multi-stage logo detector: classify, segment, shape-filter, assemble.
pub struct LogoDetector {
    params: LogoDetectorParams,
    blue: ColorCriterion,
    orange: ColorCriterion,
}

impl LogoDetector {
    /// Validate `params` and build the two pixel classifiers.
    ///
    /// All configuration errors surface here, before any image is touched.
    pub fn new(params: LogoDetectorParams) -> Result<Self, LogoParamsError> {
        params.validate()?;
        let blue = ColorCriterion::HsbNear(params.blue_classifier()?);
        let orange = ColorCriterion::HsbNear(params.orange_classifier()?);
        Ok(LogoDetector {
            params,
            blue,
            orange,
        })
    }

    pub fn params(&self) -> &LogoDetectorParams {
        &self.params
    }

    /// Run the full pipeline over a preprocessed image.
    ///
    /// Empty candidate pools are a normal outcome and yield zero instances.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, image), fields(width = image.width, height = image.height))
    )]
    pub fn detect(&self, image: &ColorImageView<'_>) -> LogoDetectionResult {
        let min = self.params.min_region_size;
        // The two passes are independent; each consumes its own mask.
        let blue_regions = extract_regions(image, &self.blue, min);
        let orange_regions = extract_regions(image, &self.orange, min);
        log::debug!(
            "segmented {} blue / {} orange region(s)",
            blue_regions.len(),
            orange_regions.len()
        );

        let (blue_circles, blue_ls) =
            split_blue_pools(blue_regions, &self.params.blue_circle, &self.params.blue_l);
        let orange_circles = filter_pool(orange_regions, &self.params.orange_circle);
        log::debug!(
            "candidate pools: {} blue circle(s), {} L(s), {} orange circle(s)",
            blue_circles.len(),
            blue_ls.len(),
            orange_circles.len()
        );

        let instances = assemble(&blue_circles, &blue_ls, &orange_circles);
        log::info!("{} logo instance(s) found", instances.len());

        LogoDetectionResult {
            blue_circles,
            blue_ls,
            orange_circles,
            instances,
        }
    }
}

/// Split blue regions into circle and L pools. The circle window is tested
/// first and each region joins at most one pool.
fn split_blue_pools(
    regions: Vec<Region>,
    circle: &ShapeCriterion,
    ell: &ShapeCriterion,
) -> (Vec<Region>, Vec<Region>) {
    let mut circles = Vec::new();
    let mut ells = Vec::new();
    for region in regions {
        let Some(moments) = MomentSet::of_region(&region) else {
            continue; // no mass, no descriptors
        };
        if circle.matches(&moments) {
            circles.push(region);
        } else if ell.matches(&moments) {
            ells.push(region);
        }
    }
    (circles, ells)
}

fn filter_pool(regions: Vec<Region>, shape: &ShapeCriterion) -> Vec<Region> {
    regions
        .into_iter()
        .filter(|region| {
            MomentSet::of_region(region)
                .map(|moments| shape.matches(&moments))
                .unwrap_or(false)
        })
        .collect()
}

/// Exhaustive triple search. The cheap containment checks run first, the
/// proximity check last.
fn assemble(
    blue_circles: &[Region],
    blue_ls: &[Region],
    orange_circles: &[Region],
) -> Vec<LogoInstance> {
    let contains = SpatialCriterion::StrictlyContains;
    let near = SpatialCriterion::WithinOwnWidth;

    let mut instances = Vec::new();
    for (circle_idx, circle) in blue_circles.iter().enumerate() {
        for (ell_idx, ell) in blue_ls.iter().enumerate() {
            if !contains.matches(circle, ell) {
                continue;
            }
            for (orange_idx, orange) in orange_circles.iter().enumerate() {
                if contains.matches(circle, orange) && near.matches(ell, orange) {
                    instances.push(LogoInstance {
                        blue_circle: circle_idx,
                        blue_l: ell_idx,
                        orange_circle: orange_idx,
                        bounding_box: circle.bounding_box(),
                    });
                }
            }
        }
    }
    instances
}
