//! Random non-overlapping chip layout
//!
//! Chips are placed one at a time in target order. Each gets a random
//! quarter-turn orientation, then footprint positions are sampled until one
//! clears every chip placed so far. When the attempt budget runs out the
//! last sample is kept anyway and a warning is recorded.

use rand::Rng;
use serde::Serialize;

use crate::core::config::PuzzleConfig;
use crate::core::types::{ChipId, Rotation};
use crate::spatial::{anchor_for_footprint, rotated_bounds, Bounds};
use crate::world::board::Board;
use crate::world::chip::Chip;
use crate::world::target::TargetSlot;

/// A chip that could not be placed without overlapping
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementWarning {
    pub chip: ChipId,
    pub attempts: u32,
}

#[derive(Debug, Clone)]
pub struct PlacementOutcome {
    pub board: Board,
    pub warnings: Vec<PlacementWarning>,
}

impl PlacementOutcome {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Scatter one chip per target across the canvas
///
/// Footprints are sampled uniformly inside the canvas for the chosen
/// orientation, so every chip stays fully visible. The result depends only
/// on `rng`.
pub fn place_randomly<R: Rng + ?Sized>(
    targets: &[TargetSlot],
    config: &PuzzleConfig,
    rng: &mut R,
) -> PlacementOutcome {
    let dims = config.chip_dimensions();
    let mut chips = Vec::with_capacity(targets.len());
    let mut occupied: Vec<Bounds> = Vec::with_capacity(targets.len());
    let mut warnings = Vec::new();

    for slot in targets {
        let rotation = Rotation::ALL[rng.gen_range(0..Rotation::ALL.len())];
        let (width, height) = dims.oriented(rotation);
        let max_left = (config.canvas_width - width).max(0.0);
        let max_top = (config.canvas_height - height).max(0.0);

        let mut anchor = anchor_for_footprint(0.0, 0.0, rotation, &dims);
        let mut footprint = rotated_bounds(anchor.x, anchor.y, rotation, &dims);
        let mut placed = false;
        let mut attempts = 0;

        while !placed && attempts < config.max_placement_attempts {
            let left = rng.gen::<f32>() * max_left;
            let top = rng.gen::<f32>() * max_top;
            // Test the rectangle validation will recompute from the anchor
            anchor = anchor_for_footprint(left, top, rotation, &dims);
            footprint = rotated_bounds(anchor.x, anchor.y, rotation, &dims);
            placed = !occupied.iter().any(|other| footprint.overlaps(other));
            attempts += 1;
        }

        if !placed {
            tracing::warn!(
                "Could not place chip {} without overlap after {} attempts",
                slot.id,
                attempts
            );
            warnings.push(PlacementWarning {
                chip: slot.id.clone(),
                attempts,
            });
        }

        chips.push(Chip::new(slot.id.clone(), anchor.x, anchor.y, rotation));
        occupied.push(footprint);
    }

    tracing::debug!(
        "Placed {} chips randomly ({} overlapping)",
        chips.len(),
        warnings.len()
    );

    PlacementOutcome {
        board: Board::from_ordered(chips),
        warnings,
    }
}
