//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Point in canvas pixel space (origin top-left, y grows downward)
pub type Point = glam::Vec2;

/// Identifier of a chip, e.g. `U3_R1C2`
///
/// The same identifier names the chip's target slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChipId(pub String);

impl ChipId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Row/column labels encoded in the id (`U<n>_R<row>C<col>`)
    ///
    /// Returns `None` for ids that don't follow the bank naming scheme.
    pub fn bank_coordinates(&self) -> Option<(&str, &str)> {
        let (_, bank) = self.0.split_once("_R")?;
        let (row, col) = bank.split_once('C')?;
        if row.is_empty() || col.is_empty() {
            return None;
        }
        Some((row, col))
    }
}

impl fmt::Display for ChipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for ChipId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ChipId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Quarter-turn orientation of a chip, clockwise in degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Parse a degree value; only exact quarter turns are accepted
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    /// Next orientation after a 90 degree clockwise turn
    pub fn next(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    /// True when width and height swap (90 and 270)
    pub fn is_sideways(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        Rotation::from_degrees(degrees)
            .ok_or_else(|| format!("rotation must be 0, 90, 180 or 270 (got {})", degrees))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_cycle() {
        let mut rotation = Rotation::Deg0;
        for expected in [90, 180, 270, 0] {
            rotation = rotation.next();
            assert_eq!(rotation.degrees(), expected);
        }
    }

    #[test]
    fn test_rotation_from_degrees() {
        assert_eq!(Rotation::from_degrees(270), Some(Rotation::Deg270));
        assert_eq!(Rotation::from_degrees(45), None);
        assert_eq!(Rotation::from_degrees(360), None);
        assert_eq!(Rotation::from_degrees(450), None);
    }

    #[test]
    fn test_rotation_sideways() {
        assert!(!Rotation::Deg0.is_sideways());
        assert!(Rotation::Deg90.is_sideways());
        assert!(!Rotation::Deg180.is_sideways());
        assert!(Rotation::Deg270.is_sideways());
    }

    #[test]
    fn test_rotation_serde_as_degrees() {
        let json = serde_json::to_string(&Rotation::Deg180).unwrap();
        assert_eq!(json, "180");
        let parsed: Rotation = serde_json::from_str("90").unwrap();
        assert_eq!(parsed, Rotation::Deg90);
        assert!(serde_json::from_str::<Rotation>("45").is_err());
        assert!(serde_json::from_str::<Rotation>("360").is_err());
    }

    #[test]
    fn test_bank_coordinates() {
        let id = ChipId::from("U3_R1C2");
        assert_eq!(id.bank_coordinates(), Some(("1", "2")));
        assert_eq!(ChipId::from("U1_R0C0").bank_coordinates(), Some(("0", "0")));
        assert_eq!(ChipId::from("mystery").bank_coordinates(), None);
        assert_eq!(ChipId::from("U1_RC").bank_coordinates(), None);
    }
}
