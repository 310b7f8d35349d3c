//! Chip footprints and placement validation

pub mod bounds;
pub mod validation;

pub use bounds::{anchor_for_footprint, rotated_bounds, Bounds, ChipDimensions};
