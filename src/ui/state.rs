//! UI state management for the puzzle front end

use serde::Serialize;
use std::collections::VecDeque;
use std::time::Duration;

use crate::core::types::ChipId;
use crate::ui::bank::BankSelection;

/// Maximum event log entries to keep
const MAX_LOG_ENTRIES: usize = 50;

/// How a chip should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChipAppearance {
    Normal,
    /// Highlighted by the RAS/CAS toggles
    BankSelected,
    /// Board is powered and this chip passed validation
    Correct,
    /// Board is powered and this chip failed validation
    Incorrect,
}

/// Game UI state
#[derive(Debug, Default)]
pub struct GameUI {
    /// Last chip clicked; target of the rotate key and drawn with a border
    pub selected_chip: Option<ChipId>,
    /// RAS/CAS toggle state
    pub bank: BankSelection,
    /// Whether the power button is held down
    pub powered: bool,
    /// Event log entries
    pub event_log: VecDeque<LogEntry>,
}

/// An entry in the event log
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub at: Duration,
    pub message: String,
    pub category: LogCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogCategory {
    Placement,
    Drag,
    Rotation,
    Validation,
    System,
}

impl GameUI {
    pub fn new() -> Self {
        Self {
            selected_chip: None,
            bank: BankSelection::new(),
            powered: false,
            event_log: VecDeque::with_capacity(MAX_LOG_ENTRIES),
        }
    }

    /// Add an entry to the event log
    pub fn log(&mut self, at: Duration, message: String, category: LogCategory) {
        if self.event_log.len() >= MAX_LOG_ENTRIES {
            self.event_log.pop_front();
        }
        self.event_log.push_back(LogEntry {
            at,
            message,
            category,
        });
    }

    /// Select a chip by ID
    pub fn select(&mut self, chip: ChipId) {
        self.selected_chip = Some(chip);
    }

    /// Clear selection
    pub fn deselect(&mut self) {
        self.selected_chip = None;
    }

    pub fn is_highlighted(&self, chip: &ChipId) -> bool {
        self.selected_chip.as_ref() == Some(chip)
    }

    /// Pick the sprite for a chip given the latest validation result
    ///
    /// `correct` is only consulted while the board is powered.
    pub fn appearance(&self, chip: &ChipId, correct: Option<bool>) -> ChipAppearance {
        if self.powered {
            match correct {
                Some(true) => ChipAppearance::Correct,
                _ => ChipAppearance::Incorrect,
            }
        } else if self.bank.is_selected(chip) {
            ChipAppearance::BankSelected
        } else {
            ChipAppearance::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::bank::BankToggle;

    #[test]
    fn test_log_is_bounded() {
        let mut ui = GameUI::new();
        for i in 0..(MAX_LOG_ENTRIES + 5) {
            ui.log(Duration::ZERO, format!("event {}", i), LogCategory::System);
        }
        assert_eq!(ui.event_log.len(), MAX_LOG_ENTRIES);
        assert_eq!(ui.event_log.front().unwrap().message, "event 5");
    }

    #[test]
    fn test_appearance_priority() {
        let mut ui = GameUI::new();
        let chip = ChipId::from("U1_R0C0");
        assert_eq!(ui.appearance(&chip, Some(false)), ChipAppearance::Normal);

        ui.bank.toggle(BankToggle::Ras0);
        ui.bank.toggle(BankToggle::Cas0);
        assert_eq!(ui.appearance(&chip, None), ChipAppearance::BankSelected);

        ui.powered = true;
        assert_eq!(ui.appearance(&chip, Some(true)), ChipAppearance::Correct);
        assert_eq!(ui.appearance(&chip, Some(false)), ChipAppearance::Incorrect);
    }

    #[test]
    fn test_selection_highlight() {
        let mut ui = GameUI::new();
        let chip = ChipId::from("U1_R0C0");
        ui.select(chip.clone());
        assert!(ui.is_highlighted(&chip));
        ui.deselect();
        assert!(!ui.is_highlighted(&chip));
    }
}
