//! Overlap check against every other chip on the board

use super::ChipFault;
use crate::spatial::ChipDimensions;
use crate::world::{Board, Chip};

pub struct OverlapValidator;

impl OverlapValidator {
    /// One fault per chip the footprint strictly overlaps
    pub fn validate(chip: &Chip, board: &Board, dims: &ChipDimensions) -> Vec<ChipFault> {
        let footprint = chip.bounds(dims);

        board
            .iter()
            .filter(|other| other.id != chip.id)
            .filter(|other| footprint.overlaps(&other.bounds(dims)))
            .map(|other| ChipFault::Overlap {
                other: other.id.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Rotation;
    use crate::world::TargetSlot;

    #[test]
    fn test_touching_chips_are_fine() {
        let dims = ChipDimensions::new(240.0, 120.0);
        let board = Board::resolved(&[
            TargetSlot::new("A_R0C0", 0.0, 0.0, Rotation::Deg0),
            TargetSlot::new("B_R0C0", 240.0, 0.0, Rotation::Deg0),
            TargetSlot::new("C_R0C0", 0.0, 120.0, Rotation::Deg180),
        ]);
        for chip in board.iter() {
            assert!(OverlapValidator::validate(chip, &board, &dims).is_empty());
        }
    }

    #[test]
    fn test_overlap_reported_both_ways() {
        let dims = ChipDimensions::new(240.0, 120.0);
        let board = Board::resolved(&[
            TargetSlot::new("A_R0C0", 0.0, 0.0, Rotation::Deg0),
            TargetSlot::new("B_R0C0", 200.0, 100.0, Rotation::Deg0),
        ]);
        let a = &board.chips()[0];
        let b = &board.chips()[1];
        assert_eq!(
            OverlapValidator::validate(a, &board, &dims),
            vec![ChipFault::Overlap {
                other: b.id.clone()
            }]
        );
        assert_eq!(OverlapValidator::validate(b, &board, &dims).len(), 1);
    }
}
