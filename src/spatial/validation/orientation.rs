//! Orientation check: exact match, no tolerance

use super::ChipFault;
use crate::world::{Chip, TargetSlot};

pub struct OrientationValidator;

impl OrientationValidator {
    /// A half turn is still wrong even though the footprint is identical
    pub fn validate(chip: &Chip, slot: &TargetSlot) -> Vec<ChipFault> {
        let mut faults = Vec::new();

        if chip.rotation != slot.rotation {
            faults.push(ChipFault::WrongRotation {
                expected: slot.rotation,
                actual: chip.rotation,
            });
        }

        faults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ChipId, Rotation};

    #[test]
    fn test_half_turn_is_wrong() {
        let slot = TargetSlot::new("U1_R0C0", 0.0, 0.0, Rotation::Deg0);
        let chip = Chip::new(ChipId::from("U1_R0C0"), 0.0, 0.0, Rotation::Deg180);
        assert_eq!(OrientationValidator::validate(&chip, &slot).len(), 1);
    }

    #[test]
    fn test_matching_rotation() {
        let slot = TargetSlot::new("U1_R0C0", 0.0, 0.0, Rotation::Deg270);
        let chip = Chip::new(ChipId::from("U1_R0C0"), 50.0, 50.0, Rotation::Deg270);
        assert!(OrientationValidator::validate(&chip, &slot).is_empty());
    }
}
