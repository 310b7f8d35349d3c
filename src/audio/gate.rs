//! Single-flight speaker: one tune at a time, extra requests are dropped

use std::time::Duration;

use crate::audio::tune::Tune;

#[derive(Debug, Clone, Default)]
pub struct AudioGate {
    busy_until: Option<Duration>,
}

impl AudioGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self, now: Duration) -> bool {
        matches!(self.busy_until, Some(until) if now < until)
    }

    /// Claim the speaker for `tune`; false if something is still playing
    pub fn try_play(&mut self, tune: &Tune, now: Duration) -> bool {
        if self.is_busy(now) {
            tracing::debug!("Tune already playing, dropping request");
            return false;
        }
        self.busy_until = Some(now.saturating_add(tune.total_duration()));
        true
    }
}
