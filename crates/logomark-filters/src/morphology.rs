use logomark_core::{ColorImage, ColorImageView, Rgba};

const NEIGHBORS8: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Grow non-background shapes by one pixel (8-neighborhood).
///
/// A background pixel takes the color of its first non-background neighbor.
/// The 1-pixel border is copied unchanged.
pub fn dilate(src: &ColorImageView<'_>, background: Rgba) -> ColorImage {
    let mut out = src.to_owned_image();
    if src.width < 3 || src.height < 3 {
        return out;
    }

    for y in 1..src.height - 1 {
        for x in 1..src.width - 1 {
            if src.get(x, y) != background {
                continue;
            }
            for (dx, dy) in NEIGHBORS8 {
                let c = src.get((x as i32 + dx) as usize, (y as i32 + dy) as usize);
                if c != background {
                    out.set(x, y, c);
                    break;
                }
            }
        }
    }
    out
}

/// Shrink non-background shapes by one pixel (8-neighborhood).
///
/// A non-background pixel with any background neighbor becomes background.
/// The 1-pixel border is copied unchanged.
pub fn erode(src: &ColorImageView<'_>, background: Rgba) -> ColorImage {
    let mut out = src.to_owned_image();
    if src.width < 3 || src.height < 3 {
        return out;
    }

    for y in 1..src.height - 1 {
        for x in 1..src.width - 1 {
            if src.get(x, y) == background {
                continue;
            }
            let has_background_neighbor = NEIGHBORS8.iter().any(|&(dx, dy)| {
                src.get((x as i32 + dx) as usize, (y as i32 + dy) as usize) == background
            });
            if has_background_neighbor {
                out.set(x, y, background);
            }
        }
    }
    out
}
