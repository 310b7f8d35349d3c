use thiserror::Error;

use crate::core::types::ChipId;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Chip listed more than once: {0}")]
    DuplicateChip(ChipId),

    #[error("Chip has no target slot: {0}")]
    UnknownChip(ChipId),

    #[error("Target slot has no chip: {0}")]
    MissingChip(ChipId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
