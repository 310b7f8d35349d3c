//! Correct chip placements on the board image

use serde::{Deserialize, Serialize};

use crate::core::types::{ChipId, Rotation};
use crate::spatial::{rotated_bounds, Bounds, ChipDimensions};

/// Where one chip belongs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSlot {
    pub id: ChipId,
    pub x: f32,
    pub y: f32,
    pub rotation: Rotation,
}

impl TargetSlot {
    pub fn new(id: impl Into<ChipId>, x: f32, y: f32, rotation: Rotation) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            rotation,
        }
    }

    pub fn bounds(&self, dims: &ChipDimensions) -> Bounds {
        rotated_bounds(self.x, self.y, self.rotation, dims)
    }

    /// Area a chip must stay inside to count as placed on this slot
    pub fn allowed_area(&self, dims: &ChipDimensions, margin: f32) -> Bounds {
        self.bounds(dims).expanded(margin)
    }
}

/// Slot table for the stock board image (four banks, U1-U4)
const DEFAULT_TARGETS: [(&str, f32, f32, Rotation); 16] = [
    ("U1_R0C0", 187.0, 165.0, Rotation::Deg0),
    ("U1_R0C2", -24.0, 345.0, Rotation::Deg90),
    ("U1_R1C0", 187.0, 548.0, Rotation::Deg0),
    ("U1_R1C2", 396.0, 346.0, Rotation::Deg90),
    ("U2_R0C0", -24.0, 745.0, Rotation::Deg90),
    ("U2_R0C2", 401.0, 746.0, Rotation::Deg90),
    ("U2_R1C0", 577.0, 747.0, Rotation::Deg90),
    ("U2_R1C2", 790.0, 626.0, Rotation::Deg90),
    ("U3_R0C0", 578.0, 347.0, Rotation::Deg90),
    ("U3_R0C2", 1003.0, 345.0, Rotation::Deg90),
    ("U3_R1C0", 1403.0, 289.0, Rotation::Deg0),
    ("U3_R1C2", 1184.0, 346.0, Rotation::Deg90),
    ("U4_R0C0", 1003.0, 747.0, Rotation::Deg90),
    ("U4_R0C2", 1184.0, 746.0, Rotation::Deg90),
    ("U4_R1C0", 1404.0, 805.0, Rotation::Deg0),
    ("U4_R1C2", 1404.0, 548.0, Rotation::Deg0),
];

pub fn default_targets() -> Vec<TargetSlot> {
    DEFAULT_TARGETS
        .iter()
        .map(|&(id, x, y, rotation)| TargetSlot::new(id, x, y, rotation))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_do_not_overlap() {
        let dims = ChipDimensions::new(240.0, 120.0);
        let targets = default_targets();
        for (i, a) in targets.iter().enumerate() {
            for b in &targets[i + 1..] {
                assert!(
                    !a.bounds(&dims).overlaps(&b.bounds(&dims)),
                    "{} overlaps {}",
                    a.id,
                    b.id
                );
            }
        }
    }

    #[test]
    fn test_allowed_area_expands_by_margin() {
        let dims = ChipDimensions::new(240.0, 120.0);
        let slot = TargetSlot::new("U1_R0C0", 187.0, 165.0, Rotation::Deg0);
        let area = slot.allowed_area(&dims, 7.0);
        assert_eq!(area.left, 180.0);
        assert_eq!(area.right, 434.0);
        assert_eq!(area.top, 158.0);
        assert_eq!(area.bottom, 292.0);
    }
}
