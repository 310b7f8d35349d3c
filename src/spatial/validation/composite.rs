//! Composite validator that runs all checks for every chip

use serde::Serialize;

use super::{ChipFault, FootprintValidator, OrientationValidator, OverlapValidator};
use crate::core::types::ChipId;
use crate::spatial::ChipDimensions;
use crate::world::{Board, TargetSlot};

/// Outcome for a single chip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChipVerdict {
    pub chip: ChipId,
    pub is_correct: bool,
    pub faults: Vec<ChipFault>,
}

impl ChipVerdict {
    pub fn new(chip: ChipId) -> Self {
        Self {
            chip,
            is_correct: true,
            faults: Vec::new(),
        }
    }

    pub fn add_faults(&mut self, faults: Vec<ChipFault>) {
        if !faults.is_empty() {
            self.is_correct = false;
            self.faults.extend(faults);
        }
    }
}

/// Per-chip results in board order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub verdicts: Vec<ChipVerdict>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every chip is correct (vacuously true for an empty board)
    pub fn all_correct(&self) -> bool {
        self.verdicts.iter().all(|v| v.is_correct)
    }

    pub fn incorrect_count(&self) -> usize {
        self.verdicts.iter().filter(|v| !v.is_correct).count()
    }

    pub fn verdict(&self, chip: &ChipId) -> Option<&ChipVerdict> {
        self.verdicts.iter().find(|v| &v.chip == chip)
    }

    /// `None` for chips not on the board
    pub fn is_correct(&self, chip: &ChipId) -> Option<bool> {
        self.verdict(chip).map(|v| v.is_correct)
    }

    /// (chip, correct) pairs in board order
    pub fn flags(&self) -> impl Iterator<Item = (&ChipId, bool)> {
        self.verdicts.iter().map(|v| (&v.chip, v.is_correct))
    }
}

pub struct CompositeValidator;

impl CompositeValidator {
    /// Check every chip on the board against its slot and its neighbours
    ///
    /// Pure: the board is only read, so repeated calls agree.
    pub fn validate_board(
        board: &Board,
        targets: &[TargetSlot],
        dims: &ChipDimensions,
        margin: f32,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();

        for chip in board.iter() {
            let mut verdict = ChipVerdict::new(chip.id.clone());

            match targets.iter().find(|slot| slot.id == chip.id) {
                Some(slot) => {
                    verdict.add_faults(OrientationValidator::validate(chip, slot));
                    verdict.add_faults(FootprintValidator::validate(chip, slot, dims, margin));
                }
                None => verdict.add_faults(vec![ChipFault::NoTarget]),
            }

            verdict.add_faults(OverlapValidator::validate(chip, board, dims));
            report.verdicts.push(verdict);
        }

        report
    }
}
