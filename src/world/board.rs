//! Ordered chip collection matching the target table one-to-one

use serde::Serialize;
use std::collections::HashSet;

use crate::core::error::{PuzzleError, Result};
use crate::core::types::{ChipId, Point};
use crate::spatial::ChipDimensions;
use crate::world::chip::Chip;
use crate::world::target::TargetSlot;

/// All chips in target-table order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Board {
    chips: Vec<Chip>,
}

impl Board {
    /// Every chip sitting exactly on its target
    pub fn resolved(targets: &[TargetSlot]) -> Self {
        Self {
            chips: targets
                .iter()
                .map(|slot| Chip::new(slot.id.clone(), slot.x, slot.y, slot.rotation))
                .collect(),
        }
    }

    /// Chips already known to be in target order
    pub(crate) fn from_ordered(chips: Vec<Chip>) -> Self {
        Self { chips }
    }

    /// Build a board from arbitrary chips, enforcing one chip per target
    ///
    /// Chips are reordered to follow the target table.
    pub fn from_chips(chips: Vec<Chip>, targets: &[TargetSlot]) -> Result<Self> {
        let mut seen = HashSet::new();
        for chip in &chips {
            if !seen.insert(chip.id.clone()) {
                return Err(PuzzleError::DuplicateChip(chip.id.clone()));
            }
            if !targets.iter().any(|slot| slot.id == chip.id) {
                return Err(PuzzleError::UnknownChip(chip.id.clone()));
            }
        }

        let mut ordered = Vec::with_capacity(targets.len());
        let mut pool = chips;
        for slot in targets {
            let idx = pool
                .iter()
                .position(|chip| chip.id == slot.id)
                .ok_or_else(|| PuzzleError::MissingChip(slot.id.clone()))?;
            ordered.push(pool.swap_remove(idx));
        }

        Ok(Self { chips: ordered })
    }

    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chip> {
        self.chips.iter()
    }

    pub fn len(&self) -> usize {
        self.chips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    pub fn get(&self, id: &ChipId) -> Option<&Chip> {
        self.chips.iter().find(|chip| &chip.id == id)
    }

    pub fn get_mut(&mut self, id: &ChipId) -> Option<&mut Chip> {
        self.chips.iter_mut().find(|chip| &chip.id == id)
    }

    /// First chip in board order whose footprint contains the point
    pub fn chip_at(&self, point: Point, dims: &ChipDimensions) -> Option<&Chip> {
        self.chips
            .iter()
            .find(|chip| chip.contains_point(point, dims))
    }

    /// Move every chip onto its target, clearing drag flags
    pub fn resolve_to(&mut self, targets: &[TargetSlot]) {
        for chip in &mut self.chips {
            if let Some(slot) = targets.iter().find(|slot| slot.id == chip.id) {
                chip.x = slot.x;
                chip.y = slot.y;
                chip.rotation = slot.rotation;
            }
            chip.is_dragging = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Rotation;
    use crate::world::target::default_targets;

    #[test]
    fn test_resolved_board_follows_target_order() {
        let targets = default_targets();
        let board = Board::resolved(&targets);
        assert_eq!(board.len(), 16);
        for (chip, slot) in board.iter().zip(&targets) {
            assert_eq!(chip.id, slot.id);
            assert_eq!(chip.position(), Point::new(slot.x, slot.y));
            assert_eq!(chip.rotation, slot.rotation);
        }
    }

    #[test]
    fn test_from_chips_reorders() {
        let targets = default_targets();
        let mut chips: Vec<Chip> = Board::resolved(&targets).chips().to_vec();
        chips.reverse();
        let board = Board::from_chips(chips, &targets).unwrap();
        assert_eq!(board.chips()[0].id, targets[0].id);
        assert_eq!(board.chips()[15].id, targets[15].id);
    }

    #[test]
    fn test_from_chips_rejects_duplicates() {
        let targets = default_targets();
        let mut chips: Vec<Chip> = Board::resolved(&targets).chips().to_vec();
        chips[1] = chips[0].clone();
        assert!(matches!(
            Board::from_chips(chips, &targets),
            Err(PuzzleError::DuplicateChip(_))
        ));
    }

    #[test]
    fn test_from_chips_rejects_unknown_and_missing() {
        let targets = default_targets();
        let mut chips: Vec<Chip> = Board::resolved(&targets).chips().to_vec();
        chips.push(Chip::new(ChipId::from("U9_R0C0"), 0.0, 0.0, Rotation::Deg0));
        assert!(matches!(
            Board::from_chips(chips, &targets),
            Err(PuzzleError::UnknownChip(_))
        ));

        let mut chips: Vec<Chip> = Board::resolved(&targets).chips().to_vec();
        chips.pop();
        assert!(matches!(
            Board::from_chips(chips, &targets),
            Err(PuzzleError::MissingChip(_))
        ));
    }

    #[test]
    fn test_chip_at_first_match_wins() {
        let dims = ChipDimensions::new(240.0, 120.0);
        let targets = vec![
            TargetSlot::new("A_R0C0", 0.0, 0.0, Rotation::Deg0),
            TargetSlot::new("B_R0C0", 100.0, 0.0, Rotation::Deg0),
        ];
        let board = Board::resolved(&targets);
        let hit = board.chip_at(Point::new(150.0, 50.0), &dims).unwrap();
        assert_eq!(hit.id.as_str(), "A_R0C0");
        assert!(board.chip_at(Point::new(500.0, 500.0), &dims).is_none());
    }
}
