//! Puzzle configuration with documented constants
//!
//! All magic numbers of the game live here. Every field has a default, so a
//! config file only needs to name the values it changes.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::error::{PuzzleError, Result};
use crate::spatial::ChipDimensions;
use crate::world::target::{default_targets, TargetSlot};

/// Configuration for the placement engine
///
/// Sizes are canvas pixels unless noted otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    // === CHIP GEOMETRY ===
    /// Unscaled chip width (long side at rotation 0)
    pub chip_width: f32,

    /// Unscaled chip height (short side at rotation 0)
    pub chip_height: f32,

    /// Scale applied to both chip dimensions
    ///
    /// At the default 2.4 a chip covers 240x120 px, matching the board image.
    pub chip_scale: f32,

    /// Slack around a target slot that still counts as "placed correctly"
    ///
    /// Applied outward on all four sides, both for validation and for
    /// snapping on release.
    pub chip_margin: f32,

    // === CANVAS ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === PLACEMENT ===
    /// Samples tried per chip before accepting an overlapping position
    pub max_placement_attempts: u32,

    /// Seed for the placement RNG; `None` draws one from entropy
    pub seed: Option<u64>,

    /// Start with every chip on its target instead of a random layout
    pub start_with_correct_position: bool,

    // === ANIMATION ===
    /// Length of the quarter-turn animation in milliseconds
    ///
    /// Zero applies rotations immediately.
    pub rotation_duration_ms: u64,

    // === BOARD ===
    /// Correct placement of every chip, in placement order
    pub targets: Vec<TargetSlot>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            chip_width: 100.0,
            chip_height: 50.0,
            chip_scale: 2.4,
            chip_margin: 7.0,

            canvas_width: 1675.0,
            canvas_height: 986.0,

            max_placement_attempts: 100,
            seed: None,
            start_with_correct_position: true,

            rotation_duration_ms: 200,

            targets: default_targets(),
        }
    }
}

impl PuzzleConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PuzzleConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Scaled chip size used by all geometry checks
    pub fn chip_dimensions(&self) -> ChipDimensions {
        ChipDimensions::new(
            self.chip_width * self.chip_scale,
            self.chip_height * self.chip_scale,
        )
    }

    pub fn rotation_duration(&self) -> Duration {
        Duration::from_millis(self.rotation_duration_ms)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !(self.chip_width > 0.0 && self.chip_height > 0.0) {
            return Err(PuzzleError::InvalidConfig(format!(
                "chip size must be positive (got {}x{})",
                self.chip_width, self.chip_height
            )));
        }

        if !(self.chip_scale > 0.0) {
            return Err(PuzzleError::InvalidConfig(format!(
                "chip_scale must be positive (got {})",
                self.chip_scale
            )));
        }

        if !(self.chip_margin >= 0.0) {
            return Err(PuzzleError::InvalidConfig(format!(
                "chip_margin must not be negative (got {})",
                self.chip_margin
            )));
        }

        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(PuzzleError::InvalidConfig(format!(
                "canvas size must be positive (got {}x{})",
                self.canvas_width, self.canvas_height
            )));
        }

        if self.max_placement_attempts == 0 {
            return Err(PuzzleError::InvalidConfig(
                "max_placement_attempts must be at least 1".into(),
            ));
        }

        if self.targets.is_empty() {
            return Err(PuzzleError::InvalidConfig("no target slots defined".into()));
        }

        let mut seen = HashSet::new();
        for slot in &self.targets {
            if !seen.insert(&slot.id) {
                return Err(PuzzleError::DuplicateChip(slot.id.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Rotation;

    #[test]
    fn test_default_config_is_valid() {
        let config = PuzzleConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.targets.len(), 16);
    }

    #[test]
    fn test_scaled_dimensions() {
        let dims = PuzzleConfig::default().chip_dimensions();
        assert!((dims.width - 240.0).abs() < 1e-3);
        assert!((dims.height - 120.0).abs() < 1e-3);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PuzzleConfig::from_toml_str(
            r#"
            chip_margin = 12.0
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(config.chip_margin, 12.0);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_placement_attempts, 100);
        assert_eq!(config.targets.len(), 16);
    }

    #[test]
    fn test_toml_target_override() {
        let config = PuzzleConfig::from_toml_str(
            r#"
            [[targets]]
            id = "U1_R0C0"
            x = 10.0
            y = 20.0
            rotation = 90
            "#,
        )
        .unwrap();
        assert_eq!(config.targets.len(), 1);
        assert_eq!(config.targets[0].rotation, Rotation::Deg90);
    }

    #[test]
    fn test_invalid_rotation_rejected() {
        let result = PuzzleConfig::from_toml_str(
            r#"
            [[targets]]
            id = "U1_R0C0"
            x = 10.0
            y = 20.0
            rotation = 45
            "#,
        );
        assert!(matches!(result, Err(PuzzleError::Toml(_))));
    }

    #[test]
    fn test_duplicate_target_rejected() {
        let mut config = PuzzleConfig::default();
        let first = config.targets[0].clone();
        config.targets.push(first);
        assert!(matches!(
            config.validate(),
            Err(PuzzleError::DuplicateChip(_))
        ));
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let config = PuzzleConfig {
            max_placement_attempts: 0,
            ..PuzzleConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PuzzleError::InvalidConfig(_))
        ));
    }
}
