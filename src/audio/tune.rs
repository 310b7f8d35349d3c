//! Tune definitions

use serde::Serialize;
use std::time::Duration;

/// Silence inserted after every note of a sequence
pub const NOTE_GAP_SECS: f32 = 0.05;

/// Length of a single beep when none is given
pub const DEFAULT_BEEP_SECS: f32 = 0.05;

/// Two 0.5 s beeps separated by 0.1 s
pub const DOUBLE_BEEP_SECS: f32 = 1.0;

pub const DEFAULT_VOLUME: f32 = 0.1;

/// Volume of the power-on arpeggios
pub const FEEDBACK_VOLUME: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Note {
    pub hz: f32,
    pub duration_secs: f32,
}

impl Note {
    pub const fn new(hz: f32, duration_secs: f32) -> Self {
        Self { hz, duration_secs }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum TuneShape {
    /// Notes played one after another
    Sequence { notes: Vec<Note> },
    Beep {
        hz: f32,
        duration_secs: f32,
    },
    DoubleBeep { hz: f32 },
}

/// Sine-wave tune for the front end to synthesize
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tune {
    pub shape: TuneShape,
    pub volume: f32,
}

impl Tune {
    pub fn sequence(notes: Vec<Note>, volume: f32) -> Self {
        Self {
            shape: TuneShape::Sequence { notes },
            volume,
        }
    }

    pub fn beep(hz: f32, duration_secs: Option<f32>) -> Self {
        Self {
            shape: TuneShape::Beep {
                hz,
                duration_secs: duration_secs.unwrap_or(DEFAULT_BEEP_SECS),
            },
            volume: DEFAULT_VOLUME,
        }
    }

    pub fn double_beep(hz: f32) -> Self {
        Self {
            shape: TuneShape::DoubleBeep { hz },
            volume: DEFAULT_VOLUME,
        }
    }

    /// Rising D major arpeggio: every chip is in place
    pub fn success() -> Self {
        Self::sequence(
            vec![
                Note::new(293.66, 0.15), // D4
                Note::new(369.99, 0.15), // F#4
                Note::new(440.00, 0.15), // A4
                Note::new(587.33, 0.3),  // D5
            ],
            FEEDBACK_VOLUME,
        )
    }

    /// Falling arpeggio: at least one chip is wrong
    pub fn failure() -> Self {
        Self::sequence(
            vec![
                Note::new(369.99, 0.15), // F#4
                Note::new(293.66, 0.15), // D4
                Note::new(246.94, 0.15), // B3
                Note::new(180.94, 0.3),
            ],
            FEEDBACK_VOLUME,
        )
    }

    /// How long the speaker stays busy
    pub fn total_duration(&self) -> Duration {
        let secs = match &self.shape {
            TuneShape::Sequence { notes } => notes
                .iter()
                .map(|note| note.duration_secs + NOTE_GAP_SECS)
                .sum::<f32>(),
            TuneShape::Beep { duration_secs, .. } => *duration_secs,
            TuneShape::DoubleBeep { .. } => DOUBLE_BEEP_SECS,
        };
        // NaN and negative lengths count as silence, overlong ones saturate
        let secs = secs.max(0.0);
        Duration::try_from_secs_f32(secs).unwrap_or(Duration::MAX)
    }
}
