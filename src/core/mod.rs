pub mod clock;
pub mod config;
pub mod error;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::PuzzleConfig;
pub use error::{PuzzleError, Result};
pub use types::{ChipId, Point, Rotation};
