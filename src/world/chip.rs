//! A draggable memory chip

use serde::{Deserialize, Serialize};

use crate::core::types::{ChipId, Point, Rotation};
use crate::spatial::{rotated_bounds, Bounds, ChipDimensions};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chip {
    pub id: ChipId,
    /// Top-left corner of the unrotated rectangle
    pub x: f32,
    pub y: f32,
    pub rotation: Rotation,
    /// Set while the pointer holds this chip
    #[serde(skip)]
    pub is_dragging: bool,
}

impl Chip {
    pub fn new(id: ChipId, x: f32, y: f32, rotation: Rotation) -> Self {
        Self {
            id,
            x,
            y,
            rotation,
            is_dragging: false,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, position: Point) {
        self.x = position.x;
        self.y = position.y;
    }

    /// Axis-aligned footprint after rotation
    pub fn bounds(&self, dims: &ChipDimensions) -> Bounds {
        rotated_bounds(self.x, self.y, self.rotation, dims)
    }

    /// Hit test against the rotated rectangle, edges inclusive
    pub fn contains_point(&self, point: Point, dims: &ChipDimensions) -> bool {
        self.bounds(dims).contains_point(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_follows_rotation() {
        let dims = ChipDimensions::new(240.0, 120.0);
        let mut chip = Chip::new(ChipId::from("U1_R0C0"), 0.0, 0.0, Rotation::Deg0);
        // Inside the upright rectangle, outside the sideways one
        let point = Point::new(10.0, 60.0);
        assert!(chip.contains_point(point, &dims));

        chip.rotation = Rotation::Deg90;
        assert!(!chip.contains_point(point, &dims));
        // Sideways footprint reaches above the anchor
        assert!(chip.contains_point(Point::new(120.0, -50.0), &dims));
    }
}
