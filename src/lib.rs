//! Memchip Puzzle - memory-chip placement game engine

pub mod animation;
pub mod audio;
pub mod core;
pub mod engine;
pub mod spatial;
pub mod ui;
pub mod world;

pub use crate::core::{ChipId, Point, PuzzleConfig, PuzzleError, Rotation};
pub use crate::engine::PuzzleEngine;
