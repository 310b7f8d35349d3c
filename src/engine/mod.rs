//! Placement & validation engine
//!
//! `PuzzleEngine` owns the board, the target table, the random source, the
//! clock and every in-flight flag. The front end forwards gestures to it and
//! redraws from its read accessors after each call; nothing else mutates game
//! state.

pub mod input;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::animation::{RotationAnimation, RotationGate};
use crate::audio::{AudioGate, Tune};
use crate::core::clock::{Clock, SystemClock};
use crate::core::config::PuzzleConfig;
use crate::core::error::Result;
use crate::core::types::{ChipId, Point};
use crate::spatial::validation::{CompositeValidator, ValidationReport};
use crate::spatial::ChipDimensions;
use crate::ui::{BankToggle, ChipAppearance, GameUI, LogCategory};
use crate::world::{find_snap_target, place_randomly, Board, Chip, PlacementWarning, TargetSlot};

pub use input::DragState;

/// Result of pressing the power button
#[derive(Debug, Clone, Serialize)]
pub struct PowerFeedback {
    pub report: ValidationReport,
    /// Tune that started playing; `None` if the speaker was busy
    pub tune: Option<Tune>,
}

/// Everything the renderer needs to draw one chip
#[derive(Debug, Clone, Serialize)]
pub struct ChipView {
    pub id: ChipId,
    pub x: f32,
    pub y: f32,
    /// Displayed angle in degrees, mid-animation values included
    pub angle: f32,
    pub appearance: ChipAppearance,
    pub highlighted: bool,
}

pub struct PuzzleEngine {
    config: PuzzleConfig,
    dims: ChipDimensions,
    board: Board,
    rng: ChaCha8Rng,
    clock: Box<dyn Clock>,
    rotation: RotationGate,
    audio: AudioGate,
    drag: Option<DragState>,
    ui: GameUI,
}

impl PuzzleEngine {
    /// Engine on the wall clock, seeded from the config or from entropy
    pub fn new(config: PuzzleConfig) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_seed(config, seed, Box::new(SystemClock::new()))
    }

    pub fn with_seed(config: PuzzleConfig, seed: u64, clock: Box<dyn Clock>) -> Result<Self> {
        tracing::info!("Placement seed: {}", seed);
        Self::with_parts(config, ChaCha8Rng::seed_from_u64(seed), clock)
    }

    pub fn with_parts(
        config: PuzzleConfig,
        rng: ChaCha8Rng,
        clock: Box<dyn Clock>,
    ) -> Result<Self> {
        config.validate()?;

        let dims = config.chip_dimensions();
        let board = Board::resolved(&config.targets);
        let mut engine = Self {
            config,
            dims,
            board,
            rng,
            clock,
            rotation: RotationGate::new(),
            audio: AudioGate::new(),
            drag: None,
            ui: GameUI::new(),
        };

        if !engine.config.start_with_correct_position {
            engine.place_randomly();
        }

        Ok(engine)
    }

    // === READ ACCESS ===

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn dims(&self) -> &ChipDimensions {
        &self.dims
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn chips(&self) -> &[Chip] {
        self.board.chips()
    }

    pub fn chip(&self, id: &ChipId) -> Option<&Chip> {
        self.board.get(id)
    }

    pub fn targets(&self) -> &[TargetSlot] {
        &self.config.targets
    }

    pub fn ui(&self) -> &GameUI {
        &self.ui
    }

    pub fn selected_chip(&self) -> Option<&ChipId> {
        self.ui.selected_chip.as_ref()
    }

    pub fn dragging(&self) -> Option<&ChipId> {
        self.drag.as_ref().map(|drag| &drag.chip)
    }

    pub fn is_rotating(&self) -> bool {
        self.rotation.is_busy(self.clock.now())
    }

    pub fn is_audio_busy(&self) -> bool {
        self.audio.is_busy(self.clock.now())
    }

    // === LAYOUT ===

    /// Scatter all chips at random orientations and positions
    ///
    /// Returns one warning per chip that had to be placed overlapping.
    pub fn place_randomly(&mut self) -> Vec<PlacementWarning> {
        self.abort_gestures();

        let outcome = place_randomly(&self.config.targets, &self.config, &mut self.rng);
        self.board = outcome.board;

        let now = self.clock.now();
        for warning in &outcome.warnings {
            self.ui.log(
                now,
                format!(
                    "{} placed overlapping after {} attempts",
                    warning.chip, warning.attempts
                ),
                LogCategory::Placement,
            );
        }
        outcome.warnings
    }

    /// Put every chip exactly on its target
    pub fn resolve_to_targets(&mut self) {
        self.abort_gestures();
        self.board.resolve_to(&self.config.targets);
        self.ui.deselect();

        tracing::info!("Resolved all chips to their targets");
        let now = self.clock.now();
        self.ui.log(now, "Board resolved".into(), LogCategory::Placement);
    }

    /// New game: random layout, selection and bank toggles cleared
    pub fn restart(&mut self) -> Vec<PlacementWarning> {
        let warnings = self.place_randomly();
        self.ui.deselect();
        self.ui.bank.clear();

        tracing::info!("Restarted with {} placement warnings", warnings.len());
        let now = self.clock.now();
        self.ui.log(now, "New game".into(), LogCategory::System);
        warnings
    }

    /// Replace the board with an explicit layout
    pub fn set_layout(&mut self, chips: Vec<Chip>) -> Result<()> {
        let board = Board::from_chips(chips, &self.config.targets)?;
        self.abort_gestures();
        self.board = board;
        Ok(())
    }

    fn abort_gestures(&mut self) {
        self.drag = None;
        self.rotation.cancel();
    }

    // === ROTATION ===

    /// Turn a chip a quarter clockwise and start its animation
    ///
    /// The new orientation takes effect at once; only the drawn angle lags
    /// behind. Returns false for unknown chips and while another rotation is
    /// still animating; such requests are dropped, not queued.
    pub fn rotate(&mut self, id: &ChipId) -> bool {
        let Some(chip) = self.board.get(id) else {
            tracing::debug!("Rotate ignored for unknown chip {}", id);
            return false;
        };

        let now = self.clock.now();
        let animation = RotationAnimation::quarter_turn(
            chip.id.clone(),
            chip.rotation,
            now,
            self.config.rotation_duration(),
        );
        let to = animation.to;
        if !self.rotation.try_start(animation) {
            tracing::debug!("Rotation already in flight, dropping request for {}", id);
            return false;
        }

        if let Some(chip) = self.board.get_mut(id) {
            chip.rotation = to;
        }
        tracing::debug!("{} now at {}", id, to);
        self.ui.log(now, format!("Rotating {}", id), LogCategory::Rotation);
        true
    }

    /// Rotate the last selected chip (the "r" key)
    pub fn rotate_selected(&mut self) -> bool {
        match self.ui.selected_chip.clone() {
            Some(id) => self.rotate(&id),
            None => false,
        }
    }

    /// Drop a finished rotation animation; returns true if one was dropped
    pub fn tick(&mut self) -> bool {
        self.rotation.take_finished(self.clock.now()).is_some()
    }

    /// Angle to draw a chip at, following any running animation
    pub fn display_angle(&self, id: &ChipId) -> Option<f32> {
        let chip = self.board.get(id)?;
        let now = self.clock.now();
        match self.rotation.running(now) {
            Some(anim) if &anim.chip == id => Some(anim.angle_at(now)),
            _ => Some(chip.rotation.degrees() as f32),
        }
    }

    // === VALIDATION ===

    /// Per-chip correctness of the current layout; never mutates the board
    pub fn validate_all(&self) -> ValidationReport {
        CompositeValidator::validate_board(
            &self.board,
            &self.config.targets,
            &self.dims,
            self.config.chip_margin,
        )
    }

    // === POINTER INPUT ===

    /// Topmost-in-order chip under the pointer
    pub fn chip_at(&self, point: Point) -> Option<ChipId> {
        self.board
            .chip_at(point, &self.dims)
            .map(|chip| chip.id.clone())
    }

    /// Press: select and grab the chip under the pointer, or deselect
    pub fn pointer_down(&mut self, point: Point) -> Option<ChipId> {
        let Some(id) = self.chip_at(point) else {
            self.ui.deselect();
            return None;
        };

        // A second press without release drops the previous grab
        if let Some(previous) = self.drag.take() {
            if let Some(chip) = self.board.get_mut(&previous.chip) {
                chip.is_dragging = false;
            }
        }

        let chip = self.board.get_mut(&id)?;
        chip.is_dragging = true;
        self.drag = Some(DragState::begin(id.clone(), point, chip.position()));
        self.ui.select(id.clone());

        tracing::debug!("Grabbed {} at ({:.1}, {:.1})", id, point.x, point.y);
        Some(id)
    }

    /// Move the grabbed chip with the pointer; no validation while dragging
    pub fn pointer_move(&mut self, point: Point) -> bool {
        let Some(drag) = &self.drag else {
            return false;
        };
        let target = drag.position_for(point);
        match self.board.get_mut(&drag.chip) {
            Some(chip) => {
                chip.set_position(target);
                true
            }
            None => false,
        }
    }

    /// Release: drop the grabbed chip and try to snap it onto a slot
    ///
    /// Returns the slot the chip snapped to.
    pub fn pointer_up(&mut self) -> Option<ChipId> {
        let drag = self.drag.take()?;
        if let Some(chip) = self.board.get_mut(&drag.chip) {
            chip.is_dragging = false;
        }
        self.snap_on_release(&drag.chip)
    }

    /// Snap a chip to the first slot whose margin area contains it
    ///
    /// Position snaps to the slot's exact coordinates; rotation is kept even
    /// when it doesn't match the slot. Slots already holding another chip are
    /// not treated specially.
    pub fn snap_on_release(&mut self, id: &ChipId) -> Option<ChipId> {
        let chip = self.board.get(id)?;
        let slot = find_snap_target(
            chip,
            &self.config.targets,
            &self.dims,
            self.config.chip_margin,
        )?;
        let (slot_id, x, y) = (slot.id.clone(), slot.x, slot.y);

        let chip = self.board.get_mut(id)?;
        chip.x = x;
        chip.y = y;

        tracing::debug!("{} snapped to slot {}", id, slot_id);
        let message = format!("{} snapped to {}", id, slot_id);
        self.ui.log(self.clock.now(), message, LogCategory::Drag);
        Some(slot_id)
    }

    // === BUTTONS ===

    pub fn toggle_bank(&mut self, toggle: BankToggle) {
        self.ui.bank.toggle(toggle);
    }

    /// Power button pressed: validate and request the matching tune
    pub fn power_on(&mut self) -> PowerFeedback {
        self.ui.powered = true;
        let report = self.validate_all();

        let tune = if report.all_correct() {
            Tune::success()
        } else {
            Tune::failure()
        };
        let now = self.clock.now();
        let tune = self.audio.try_play(&tune, now).then_some(tune);

        tracing::info!(
            "Power on: {} of {} chips incorrect",
            report.incorrect_count(),
            report.verdicts.len()
        );
        self.ui.log(
            now,
            format!("{} incorrect", report.incorrect_count()),
            LogCategory::Validation,
        );

        PowerFeedback { report, tune }
    }

    /// Power button released
    pub fn power_off(&mut self) {
        self.ui.powered = false;
    }

    /// Draw list in board order
    pub fn chip_views(&self) -> Vec<ChipView> {
        let report = self.ui.powered.then(|| self.validate_all());

        self.board
            .iter()
            .map(|chip| {
                let correct = report.as_ref().and_then(|r| r.is_correct(&chip.id));
                ChipView {
                    id: chip.id.clone(),
                    x: chip.x,
                    y: chip.y,
                    angle: self
                        .display_angle(&chip.id)
                        .unwrap_or(chip.rotation.degrees() as f32),
                    appearance: self.ui.appearance(&chip.id, correct),
                    highlighted: self.ui.is_highlighted(&chip.id),
                }
            })
            .collect()
    }
}
