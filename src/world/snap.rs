//! Snap-to-target on drag release

use crate::spatial::ChipDimensions;
use crate::world::chip::Chip;
use crate::world::target::TargetSlot;

/// First slot, in table order, whose margin-expanded area fully contains the
/// chip's footprint
///
/// Rotation is not compared: a chip may snap onto a slot it is wrongly
/// oriented for, as long as its footprint fits.
pub fn find_snap_target<'a>(
    chip: &Chip,
    targets: &'a [TargetSlot],
    dims: &ChipDimensions,
    margin: f32,
) -> Option<&'a TargetSlot> {
    let footprint = chip.bounds(dims);
    targets
        .iter()
        .find(|slot| slot.allowed_area(dims, margin).contains(&footprint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ChipId, Rotation};

    fn dims() -> ChipDimensions {
        ChipDimensions::new(240.0, 120.0)
    }

    #[test]
    fn test_snap_within_margin() {
        let targets = vec![TargetSlot::new("A_R0C0", 100.0, 100.0, Rotation::Deg0)];
        let chip = Chip::new(ChipId::from("B_R0C0"), 105.0, 94.0, Rotation::Deg0);
        let slot = find_snap_target(&chip, &targets, &dims(), 7.0).unwrap();
        assert_eq!(slot.id.as_str(), "A_R0C0");
    }

    #[test]
    fn test_no_snap_outside_margin() {
        let targets = vec![TargetSlot::new("A_R0C0", 100.0, 100.0, Rotation::Deg0)];
        let chip = Chip::new(ChipId::from("A_R0C0"), 108.0, 100.0, Rotation::Deg0);
        assert!(find_snap_target(&chip, &targets, &dims(), 7.0).is_none());
    }

    #[test]
    fn test_half_turn_still_snaps() {
        let targets = vec![TargetSlot::new("A_R0C0", 100.0, 100.0, Rotation::Deg0)];
        let chip = Chip::new(ChipId::from("A_R0C0"), 102.0, 102.0, Rotation::Deg180);
        assert!(find_snap_target(&chip, &targets, &dims(), 7.0).is_some());
    }

    #[test]
    fn test_sideways_chip_never_fits_upright_slot() {
        let targets = vec![TargetSlot::new("A_R0C0", 100.0, 100.0, Rotation::Deg0)];
        let chip = Chip::new(ChipId::from("A_R0C0"), 100.0, 100.0, Rotation::Deg90);
        assert!(find_snap_target(&chip, &targets, &dims(), 7.0).is_none());
    }

    #[test]
    fn test_overlapping_areas_resolve_to_first_slot() {
        let targets = vec![
            TargetSlot::new("A_R0C0", 100.0, 100.0, Rotation::Deg0),
            TargetSlot::new("B_R0C0", 104.0, 100.0, Rotation::Deg0),
        ];
        let chip = Chip::new(ChipId::from("B_R0C0"), 102.0, 100.0, Rotation::Deg0);
        let slot = find_snap_target(&chip, &targets, &dims(), 7.0).unwrap();
        assert_eq!(slot.id.as_str(), "A_R0C0");
    }
}
