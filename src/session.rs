use crate::canvas::history::SnapshotHistory;
use crate::canvas::keyboard::{map_key_event_to_command, KeyCommand, KeyEvent};
use crate::canvas::state::{can_transition, SessionPhase};
use crate::canvas::surface::{PointerInput, Surface};
use crate::eval::client::{EvalClient, EvalError};
use crate::eval::env::VariableEnvironment;
use crate::overlay::{OverlayRenderer, ResultEntry};
use crate::settings::Settings;

/// Outcome of an evaluation trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluateOutcome {
    /// The response was applied; carries the number of entries received.
    Applied(usize),
    /// Refused: a stroke is in progress or an evaluation is outstanding.
    Busy,
}

/// Composition root for one interactive sketching session. All mutation is
/// driven by host callbacks: pointer input, key chords, viewport resize,
/// the evaluation trigger and the idle tick. Key chords dispatch through
/// here rather than through captured stack references, so undo always
/// reaches the live history.
pub struct Session {
    surface: Surface,
    history: SnapshotHistory,
    env: VariableEnvironment,
    overlay: OverlayRenderer,
    client: EvalClient,
    phase: SessionPhase,
}

impl Session {
    pub fn new(settings: &Settings, width: u32, height: u32) -> anyhow::Result<Self> {
        let client = EvalClient::new(&settings.calculate_url())?;
        let mut surface = Surface::new(width, height);
        surface.set_style(settings.stroke_style());
        surface.set_background(settings.background_color());
        surface.set_page_offset(settings.surface_offset);

        Ok(Self {
            surface,
            history: SnapshotHistory::with_limit(settings.history_limit),
            env: VariableEnvironment::default(),
            overlay: OverlayRenderer::default(),
            client,
            phase: SessionPhase::Idle,
        })
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    pub fn env(&self) -> &VariableEnvironment {
        &self.env
    }

    pub fn overlay(&self) -> &OverlayRenderer {
        &self.overlay
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn pointer_down(&mut self, input: PointerInput) {
        if !can_transition(self.phase, SessionPhase::Stroking) {
            tracing::debug!(phase = ?self.phase, "pointer down ignored");
            return;
        }
        self.surface.begin_stroke(&mut self.history, input);
        if self.surface.stroke_active() {
            self.phase = SessionPhase::Stroking;
        }
    }

    pub fn pointer_moved(&mut self, input: PointerInput) {
        self.surface.extend_stroke(input);
    }

    pub fn pointer_up(&mut self) {
        self.surface.end_stroke();
        if self.phase == SessionPhase::Stroking {
            self.phase = SessionPhase::Idle;
        }
    }

    pub fn key_event(&mut self, event: KeyEvent) {
        if let Some(KeyCommand::Undo) = map_key_event_to_command(event) {
            self.history.pop_and_apply(&mut self.surface);
        }
    }

    pub fn viewport_resized(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
    }

    /// Trigger one evaluation of the current sketch. Refused while a stroke
    /// or another evaluation is in progress. On failure every component is
    /// left untouched; on success assignment entries fold into the variable
    /// environment, every entry is forwarded to the overlay in arrival
    /// order, and the sketch raster is cleared so the typeset output
    /// replaces the ink.
    pub fn evaluate(&mut self) -> Result<EvaluateOutcome, EvalError> {
        if self.phase != SessionPhase::Idle {
            tracing::debug!(phase = ?self.phase, "evaluation refused while busy");
            return Ok(EvaluateOutcome::Busy);
        }

        self.phase = SessionPhase::Evaluating;
        let result = self.run_evaluation();
        self.phase = SessionPhase::Idle;

        if let Err(err) = &result {
            tracing::warn!(%err, "evaluation failed; session continues");
        }
        result
    }

    fn run_evaluation(&mut self) -> Result<EvaluateOutcome, EvalError> {
        let image = self
            .surface
            .export_data_url()
            .map_err(|err| EvalError::Transport(format!("surface export failed: {err}")))?;
        let vars = self.env.snapshot();

        let entries = self.client.evaluate(&image, &vars)?;
        let count = entries.len();

        for entry in entries {
            if entry.assign {
                self.env.assign(entry.expr.clone(), entry.result.clone());
            }
            self.overlay.accept(ResultEntry {
                expression: entry.expr,
                answer: entry.result,
            });
        }

        if count > 0 {
            self.surface.clear();
        }

        Ok(EvaluateOutcome::Applied(count))
    }

    /// Idle-tick callback: flush the pending typeset pass, if any.
    pub fn tick(&mut self) {
        self.overlay.tick();
    }

    /// Full session reset: surface, overlay, variable environment and undo
    /// history return to their initial state together.
    pub fn reset(&mut self) {
        self.surface.clear();
        self.overlay.reset();
        self.env.reset();
        self.history.clear();
        self.phase = SessionPhase::Idle;
    }

    /// Explicit clear: empties the result history and the sketch raster,
    /// keeping the variable environment and typeset queue.
    pub fn clear_results(&mut self) {
        self.overlay.clear_history();
        self.surface.clear();
    }

    #[cfg(test)]
    pub fn force_phase_for_test(&mut self, phase: SessionPhase) {
        self.phase = phase;
    }
}
