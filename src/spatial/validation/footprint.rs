//! Footprint check: chip must lie inside its slot's margin-expanded area

use super::ChipFault;
use crate::spatial::ChipDimensions;
use crate::world::{Chip, TargetSlot};

pub struct FootprintValidator;

impl FootprintValidator {
    pub fn validate(
        chip: &Chip,
        slot: &TargetSlot,
        dims: &ChipDimensions,
        margin: f32,
    ) -> Vec<ChipFault> {
        let mut faults = Vec::new();

        let footprint = chip.bounds(dims);
        let allowed = slot.allowed_area(dims, margin);
        if !allowed.contains(&footprint) {
            faults.push(ChipFault::OutsideTarget {
                chip: footprint,
                allowed,
            });
        }

        faults
    }
}
