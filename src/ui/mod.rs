//! Interaction state shared with the front end

pub mod bank;
pub mod state;

pub use bank::{BankSelection, BankToggle};
pub use state::{ChipAppearance, GameUI, LogCategory, LogEntry};
