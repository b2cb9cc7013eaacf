use logomark_core::{ColorCriterion, ColorImageView, PixelCoord, Region};

use crate::mask::ClassificationMask;

/// Seed pixels this close to the image edge are skipped during the scan.
/// The fill itself is only bounded by the image, so a region seeded further
/// in may still collect its border pixels.
pub const SEED_BORDER: usize = 2;

/// Extract the 4-connected regions matching `criterion`, keeping only those
/// with more than `min_region_size` pixels.
pub fn extract_regions(
    src: &ColorImageView<'_>,
    criterion: &ColorCriterion,
    min_region_size: usize,
) -> Vec<Region> {
    let mask = ClassificationMask::from_image(src, criterion);
    regions_from_mask(mask, min_region_size)
}

/// Consume a mask, returning its qualifying regions in discovery order.
///
/// Discovery order carries no meaning downstream; regions from one mask are
/// pairwise disjoint by construction.
pub fn regions_from_mask(mut mask: ClassificationMask, min_region_size: usize) -> Vec<Region> {
    let (width, height) = (mask.width(), mask.height());
    if width <= 2 * SEED_BORDER || height <= 2 * SEED_BORDER {
        return Vec::new();
    }

    let mut regions = Vec::new();
    for y in SEED_BORDER..height - SEED_BORDER {
        for x in SEED_BORDER..width - SEED_BORDER {
            if !mask.get(x, y) {
                continue;
            }
            let pixels = flood_fill(&mut mask, x, y);
            if pixels.len() > min_region_size {
                if let Some(region) = Region::from_pixels(pixels) {
                    regions.push(region);
                }
            }
        }
    }

    log::debug!(
        "segmentation kept {} region(s) above {} px",
        regions.len(),
        min_region_size
    );
    regions
}

/// Iterative stack-based 4-connected fill. Consumes mask cells as it visits
/// them, so each cell lands in exactly one region.
fn flood_fill(mask: &mut ClassificationMask, seed_x: usize, seed_y: usize) -> Vec<PixelCoord> {
    let (width, height) = (mask.width(), mask.height());
    let mut pixels = Vec::new();
    let mut pending = vec![(seed_x, seed_y)];

    while let Some((x, y)) = pending.pop() {
        if !mask.get(x, y) {
            // Already consumed through another stack entry.
            continue;
        }
        mask.clear(x, y);
        pixels.push(PixelCoord::new(x as i32, y as i32));

        if x > 0 && mask.get(x - 1, y) {
            pending.push((x - 1, y));
        }
        if x + 1 < width && mask.get(x + 1, y) {
            pending.push((x + 1, y));
        }
        if y > 0 && mask.get(x, y - 1) {
            pending.push((x, y - 1));
        }
        if y + 1 < height && mask.get(x, y + 1) {
            pending.push((x, y + 1));
        }
    }

    pixels
}
