//! Core color, image and region types for logo mark detection.
//!
//! This crate is intentionally small. It knows nothing about filters or the
//! detection pipeline; it provides the value types those crates share.

mod color;
mod criterion;
mod image;
mod logger;
mod region;

pub use color::{Hsb, Rgba};
pub use criterion::{ColorCriterion, CriterionError, HsbMargins, HsbNearCriterion};
pub use image::{ColorImage, ColorImageView};
pub use region::{BoundingBox, PixelCoord, Region};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
