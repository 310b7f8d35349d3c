//! Axis-aligned chip footprints
//!
//! A chip is positioned by the top-left corner of its *unrotated* rectangle
//! and rotates in place around that rectangle's center. For quarter turns the
//! footprint therefore swaps width and height and is re-centered on the
//! original center rather than anchored at (x, y).

use serde::{Deserialize, Serialize};

use crate::core::types::{Point, Rotation};

/// Scaled chip size at rotation 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChipDimensions {
    pub width: f32,
    pub height: f32,
}

impl ChipDimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Footprint size for a rotation (width, height)
    pub fn oriented(&self, rotation: Rotation) -> (f32, f32) {
        if rotation.is_sideways() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }

    /// Offset from the anchor (x, y) to the footprint's top-left corner
    pub fn footprint_offset(&self, rotation: Rotation) -> (f32, f32) {
        if rotation.is_sideways() {
            (
                (self.width - self.height) / 2.0,
                (self.height - self.width) / 2.0,
            )
        } else {
            (0.0, 0.0)
        }
    }
}

/// Axis-aligned box in canvas space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            right: left + width,
            top,
            bottom: top + height,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Strict overlap: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Bounds) -> bool {
        !(self.right <= other.left
            || self.left >= other.right
            || self.bottom <= other.top
            || self.top >= other.bottom)
    }

    /// True if `inner` lies entirely within this box (edges inclusive)
    pub fn contains(&self, inner: &Bounds) -> bool {
        inner.left >= self.left
            && inner.right <= self.right
            && inner.top >= self.top
            && inner.bottom <= self.bottom
    }

    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }

    /// Grow outward by `margin` on all four sides
    pub fn expanded(&self, margin: f32) -> Bounds {
        Bounds {
            left: self.left - margin,
            right: self.right + margin,
            top: self.top - margin,
            bottom: self.bottom + margin,
        }
    }
}

/// Footprint of a chip anchored at (x, y) with the given rotation
pub fn rotated_bounds(x: f32, y: f32, rotation: Rotation, dims: &ChipDimensions) -> Bounds {
    let (width, height) = dims.oriented(rotation);
    let (dx, dy) = dims.footprint_offset(rotation);
    Bounds::new(x + dx, y + dy, width, height)
}

/// Inverse of [`rotated_bounds`]: the anchor whose footprint starts at
/// (left, top)
pub fn anchor_for_footprint(
    left: f32,
    top: f32,
    rotation: Rotation,
    dims: &ChipDimensions,
) -> Point {
    let (dx, dy) = dims.footprint_offset(rotation);
    Point::new(left - dx, top - dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims() -> ChipDimensions {
        ChipDimensions::new(240.0, 120.0)
    }

    #[test]
    fn test_upright_bounds_anchored() {
        for rotation in [Rotation::Deg0, Rotation::Deg180] {
            let b = rotated_bounds(10.0, 20.0, rotation, &dims());
            assert_eq!(b, Bounds::new(10.0, 20.0, 240.0, 120.0));
        }
    }

    #[test]
    fn test_sideways_bounds_recentered() {
        for rotation in [Rotation::Deg90, Rotation::Deg270] {
            let b = rotated_bounds(10.0, 20.0, rotation, &dims());
            assert_eq!(b.width(), 120.0);
            assert_eq!(b.height(), 240.0);
            // Unrotated center is (130, 80)
            assert_eq!(b.center(), Point::new(130.0, 80.0));
            assert_eq!(b.left, 70.0);
            assert_eq!(b.top, -40.0);
        }
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let right = Bounds::new(10.0, 0.0, 10.0, 10.0);
        let below = Bounds::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
        assert!(!right.overlaps(&a));
    }

    #[test]
    fn test_overlap_detected() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(9.0, 9.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_containment_with_margin() {
        let slot = Bounds::new(100.0, 100.0, 240.0, 120.0).expanded(7.0);
        assert!(slot.contains(&Bounds::new(93.0, 93.0, 240.0, 120.0)));
        assert!(slot.contains(&Bounds::new(107.0, 107.0, 240.0, 120.0)));
        assert!(!slot.contains(&Bounds::new(107.5, 100.0, 240.0, 120.0)));
    }

    #[test]
    fn test_anchor_round_trip() {
        let d = dims();
        for rotation in Rotation::ALL {
            let anchor = anchor_for_footprint(300.0, 400.0, rotation, &d);
            let b = rotated_bounds(anchor.x, anchor.y, rotation, &d);
            assert_eq!(b.left, 300.0);
            assert_eq!(b.top, 400.0);
        }
    }

    #[test]
    fn test_contains_point_inclusive() {
        let b = Bounds::new(0.0, 0.0, 10.0, 5.0);
        assert!(b.contains_point(Point::new(0.0, 0.0)));
        assert!(b.contains_point(Point::new(10.0, 5.0)));
        assert!(!b.contains_point(Point::new(10.1, 2.0)));
    }
}
