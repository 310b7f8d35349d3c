//! Quarter-turn animation with a single in-flight slot.
//!
//! A rotation request records where it started and when, and the renderer
//! asks for the interpolated angle each frame. The chip's orientation itself
//! changes when the turn starts. Only one rotation may be running at a time,
//! across all chips; requests made while one runs are refused.

use std::time::Duration;

use crate::core::types::{ChipId, Rotation};

/// A single 90 degree clockwise turn in progress
#[derive(Clone, Debug, PartialEq)]
pub struct RotationAnimation {
    pub chip: ChipId,
    pub from: Rotation,
    pub to: Rotation,
    pub started_at: Duration,
    pub duration: Duration,
}

impl RotationAnimation {
    pub fn quarter_turn(
        chip: ChipId,
        from: Rotation,
        started_at: Duration,
        duration: Duration,
    ) -> Self {
        Self {
            chip,
            from,
            to: from.next(),
            started_at,
            duration,
        }
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Displayed angle in degrees; runs past 270 up to 360 on the last turn
    pub fn angle_at(&self, now: Duration) -> f32 {
        self.from.degrees() as f32 + 90.0 * self.progress(now)
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Holds at most one running rotation
///
/// A finished animation stays parked until it is taken or replaced, but it
/// no longer counts as busy.
#[derive(Clone, Debug, Default)]
pub struct RotationGate {
    active: Option<RotationAnimation>,
}

impl RotationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while an animation is still running at `now`
    pub fn is_busy(&self, now: Duration) -> bool {
        self.running(now).is_some()
    }

    /// The running animation at `now`, if any
    pub fn running(&self, now: Duration) -> Option<&RotationAnimation> {
        self.active.as_ref().filter(|anim| !anim.is_finished(now))
    }

    /// Start an animation unless one is still running at its start time
    ///
    /// Returns false (and drops the request) while busy.
    pub fn try_start(&mut self, animation: RotationAnimation) -> bool {
        if self.is_busy(animation.started_at) {
            return false;
        }
        self.active = Some(animation);
        true
    }

    /// Take the animation out once it has finished
    pub fn take_finished(&mut self, now: Duration) -> Option<RotationAnimation> {
        if self.active.as_ref()?.is_finished(now) {
            self.active.take()
        } else {
            None
        }
    }

    pub fn cancel(&mut self) -> Option<RotationAnimation> {
        self.active.take()
    }
}
