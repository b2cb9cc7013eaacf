//! Image filters used ahead of logo detection.
//!
//! Every filter is a pure function from a borrowed [`ColorImageView`] to a
//! fresh [`ColorImage`]. Kernel and morphology passes leave the 1-pixel
//! border as in the input.

mod kernel;
mod morphology;
mod pointwise;
mod replace;

pub use kernel::{convolve3x3, median3x3, Kernel3};
pub use morphology::{dilate, erode};
pub use pointwise::{
    adjust_brightness_contrast, grayscale, negate, shift_saturation, threshold_luma,
};
pub use replace::ColorReplacement;

use logomark_core::{ColorImage, ColorImageView};

/// Standard preprocessing chain ahead of detection: median denoise,
/// sharpening, HSB color normalization, then one dilate/erode pass to close
/// small gaps in the normalized shapes.
pub fn preprocess(src: &ColorImageView<'_>, replacement: &ColorReplacement) -> ColorImage {
    log::debug!("preprocessing {}x{} image", src.width, src.height);
    let denoised = median3x3(src);
    let sharpened = convolve3x3(&denoised.as_view(), &Kernel3::sharpen());
    let normalized = replacement.apply(&sharpened.as_view());
    let background = replacement.fallback();
    let dilated = dilate(&normalized.as_view(), background);
    erode(&dilated.as_view(), background)
}
