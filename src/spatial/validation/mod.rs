//! Correctness checks for a chip layout

mod composite;
mod footprint;
mod orientation;
mod overlap;

pub use composite::{ChipVerdict, CompositeValidator, ValidationReport};
pub use footprint::FootprintValidator;
pub use orientation::OrientationValidator;
pub use overlap::OverlapValidator;

use serde::Serialize;

use crate::core::types::{ChipId, Rotation};
use crate::spatial::Bounds;

/// Why a chip is not placed correctly
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChipFault {
    WrongRotation {
        expected: Rotation,
        actual: Rotation,
    },
    OutsideTarget {
        chip: Bounds,
        allowed: Bounds,
    },
    Overlap { other: ChipId },
    NoTarget,
}
