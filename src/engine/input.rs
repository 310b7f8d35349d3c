//! Pointer drag bookkeeping

use crate::core::types::{ChipId, Point};

/// A chip held by the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub chip: ChipId,
    /// Pointer position relative to the chip anchor at grab time
    pub offset: Point,
}

impl DragState {
    pub fn begin(chip: ChipId, pointer: Point, chip_position: Point) -> Self {
        Self {
            chip,
            offset: pointer - chip_position,
        }
    }

    /// Chip anchor that keeps the grab offset under the pointer
    pub fn position_for(&self, pointer: Point) -> Point {
        pointer - self.offset
    }
}
