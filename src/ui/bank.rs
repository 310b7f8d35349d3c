//! RAS/CAS bank selection toggles
//!
//! Purely cosmetic: chips whose row and column match the active strobes are
//! drawn highlighted. Validation ignores this entirely.

use serde::Serialize;
use std::str::FromStr;

use crate::core::types::ChipId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BankToggle {
    Ras0,
    Ras1,
    Cas0,
    Cas2,
}

impl FromStr for BankToggle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ras0" => Ok(BankToggle::Ras0),
            "ras1" => Ok(BankToggle::Ras1),
            "cas0" => Ok(BankToggle::Cas0),
            "cas2" => Ok(BankToggle::Cas2),
            other => Err(format!("unknown toggle '{}'", other)),
        }
    }
}

/// RAS0/RAS1 and CAS0/CAS2 pairs; each pair has at most one strobe on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BankSelection {
    pub ras0: bool,
    pub ras1: bool,
    pub cas0: bool,
    pub cas2: bool,
}

impl BankSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a toggle; switching one on switches its partner off
    pub fn toggle(&mut self, toggle: BankToggle) {
        match toggle {
            BankToggle::Ras0 => {
                self.ras0 = !self.ras0;
                if self.ras0 {
                    self.ras1 = false;
                }
            }
            BankToggle::Ras1 => {
                self.ras1 = !self.ras1;
                if self.ras1 {
                    self.ras0 = false;
                }
            }
            BankToggle::Cas0 => {
                self.cas0 = !self.cas0;
                if self.cas0 {
                    self.cas2 = false;
                }
            }
            BankToggle::Cas2 => {
                self.cas2 = !self.cas2;
                if self.cas2 {
                    self.cas0 = false;
                }
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_on(&self, toggle: BankToggle) -> bool {
        match toggle {
            BankToggle::Ras0 => self.ras0,
            BankToggle::Ras1 => self.ras1,
            BankToggle::Cas0 => self.cas0,
            BankToggle::Cas2 => self.cas2,
        }
    }

    /// Needs one active RAS and one active CAS matching the chip's row/column
    pub fn is_selected(&self, chip: &ChipId) -> bool {
        let Some((row, col)) = chip.bank_coordinates() else {
            return false;
        };
        let row_match = (self.ras0 && row == "0") || (self.ras1 && row == "1");
        let col_match = (self.cas0 && col == "0") || (self.cas2 && col == "2");
        row_match && col_match
    }
}
