//! Chips, target slots and the board that holds them

pub mod board;
pub mod chip;
pub mod placement;
pub mod snap;
pub mod target;

pub use board::Board;
pub use chip::Chip;
pub use placement::{place_randomly, PlacementOutcome, PlacementWarning};
pub use snap::find_snap_target;
pub use target::{default_targets, TargetSlot};
