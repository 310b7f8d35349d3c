//! Audio feedback descriptions and single-flight playback gating
//!
//! The engine never produces sound itself. It decides *which* tune should
//! play and whether the speaker is free; the front end synthesizes it.

pub mod gate;
pub mod tune;

pub use gate::AudioGate;
pub use tune::{Note, Tune, TuneShape};
