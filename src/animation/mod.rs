//! Time-sliced chip animations

pub mod rotation;

pub use rotation::{RotationAnimation, RotationGate};
