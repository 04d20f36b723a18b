//! The shrink/stop/score round.
//!
//! A painting starts at the configured size and shrinks linearly with elapsed
//! time toward a tiny lower bound. The player stops it as close as possible
//! to the frame's size. Reaching the lower bound ends the round on its own.
//!
//! ```text
//!            advance reaches bound / request_stop
//!   Active ───────────────────────────────────────▶ Finished
//!     ▲                                                │
//!     └──────────────── request_restart ───────────────┘
//! ```

use super::config::GameConfig;
use super::constants::{HINT_TEXT, PROMPT_TEXT};
use super::ports::{Clock, DisplaySurface, InputEvent, InputSource, ScaleTarget};
use super::scoring::{evaluate_stop, result_text, score_text, Evaluation};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Shrinking and waiting for a stop.
    Active,
    /// Scored and waiting for a restart.
    Finished,
}

/// Move `current` toward `target` by at most `max_delta`, never past it.
pub fn move_towards(current: f64, target: f64, max_delta: f64) -> f64 {
    let gap = target - current;
    if gap.abs() <= max_delta {
        target
    } else {
        current + gap.signum() * max_delta
    }
}

#[derive(Debug)]
pub struct ShrinkGame<D, S> {
    config: GameConfig,
    phase: Phase,
    scale: f64,
    round: u32,
    last_evaluation: Option<Evaluation>,
    display: D,
    target: S,
}

impl<D: DisplaySurface, S: ScaleTarget> ShrinkGame<D, S> {
    /// Create a game and start its first round.
    pub fn new(config: GameConfig, display: D, target: S) -> Self {
        let mut game = Self {
            config,
            phase: Phase::Active,
            scale: config.initial_scale,
            round: 0,
            last_evaluation: None,
            display,
            target,
        };
        game.initialize();
        game
    }

    /// Reset to a fresh round: full size, active, prompt text shown.
    pub fn initialize(&mut self) {
        self.phase = Phase::Active;
        self.round += 1;
        self.set_scale(self.config.initial_scale);
        self.display.set_score_text(PROMPT_TEXT);
        self.display.set_result_text(HINT_TEXT);
        debug!(
            round = self.round,
            initial_scale = self.config.initial_scale,
            "round started"
        );
    }

    /// Shrink by `shrink_rate * delta_time`. Reaching the lower bound ends
    /// the round with the painting at zero.
    ///
    /// No-op unless active. Negative or non-finite deltas count as zero.
    pub fn advance(&mut self, delta_time: f64) -> Option<Evaluation> {
        if self.phase != Phase::Active {
            return None;
        }

        let delta_time = if delta_time.is_finite() {
            delta_time.max(0.0)
        } else {
            0.0
        };
        let lower_bound = self.config.lower_bound();
        let next = move_towards(
            self.scale,
            lower_bound,
            self.config.shrink_rate * delta_time,
        );

        if next > lower_bound {
            self.set_scale(next);
            None
        } else {
            self.set_scale(0.0);
            debug!(round = self.round, "painting hit the lower bound");
            Some(self.evaluate())
        }
    }

    /// Player stop. No-op unless active.
    pub fn request_stop(&mut self) -> Option<Evaluation> {
        if self.phase != Phase::Active {
            return None;
        }
        Some(self.evaluate())
    }

    /// Start the next round. Returns `false` (and does nothing) while a round
    /// is still active.
    pub fn request_restart(&mut self) -> bool {
        if self.phase != Phase::Finished {
            return false;
        }
        self.initialize();
        true
    }

    /// One frame: consume this frame's input and elapsed time.
    ///
    /// A finished round only listens for restart. An active round shrinks
    /// first, then honours a stop if it is still running.
    pub fn tick<C: Clock, I: InputSource>(
        &mut self,
        clock: &mut C,
        input: &mut I,
    ) -> Option<Evaluation> {
        let events = input.drain_events();
        let delta_time = clock.delta_time();

        match self.phase {
            Phase::Finished => {
                if events.contains(&InputEvent::RestartPressed) {
                    self.request_restart();
                }
                None
            }
            Phase::Active => {
                if let Some(evaluation) = self.advance(delta_time) {
                    return Some(evaluation);
                }
                if events.contains(&InputEvent::StopPressed) {
                    self.request_stop()
                } else {
                    None
                }
            }
        }
    }

    fn evaluate(&mut self) -> Evaluation {
        debug_assert_eq!(self.phase, Phase::Active);
        self.phase = Phase::Finished;

        let evaluation = evaluate_stop(self.scale, self.config.target_scale());
        self.display.set_score_text(&score_text(&evaluation));
        self.display.set_result_text(&result_text(&evaluation));
        self.last_evaluation = Some(evaluation);

        info!(
            round = self.round,
            scale = evaluation.scale,
            score = evaluation.score,
            grade = evaluation.grade.message(),
            "round evaluated"
        );
        evaluation
    }

    fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
        self.target.set_uniform_scale(scale);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// 1-based index of the current round.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Evaluation of the most recent finished round, kept across restarts.
    pub fn last_evaluation(&self) -> Option<&Evaluation> {
        self.last_evaluation.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn target(&self) -> &S {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{RESTART_HINT, TARGET_SCALE};
    use crate::core::ports::{FixedClock, ScaleReadout, ScriptedInput, TextPanel};
    use crate::core::scoring::Grade;

    fn new_game() -> ShrinkGame<TextPanel, ScaleReadout> {
        ShrinkGame::new(
            GameConfig::default(),
            TextPanel::default(),
            ScaleReadout::default(),
        )
    }

    #[test]
    fn test_move_towards() {
        assert!((move_towards(5.0, 0.0, 1.0) - 4.0).abs() < 1e-12);
        assert_eq!(move_towards(0.5, 0.0, 1.0), 0.0);
        assert!((move_towards(0.0, 1.0, 0.25) - 0.25).abs() < 1e-12);
        assert_eq!(move_towards(2.0, 2.0, 0.0), 2.0);
    }

    #[test]
    fn test_new_game_is_active_at_initial_scale() {
        let game = new_game();
        assert_eq!(game.phase(), Phase::Active);
        assert!((game.scale() - 5.0).abs() < f64::EPSILON);
        assert!((game.target().scale - 5.0).abs() < f64::EPSILON);
        assert_eq!(game.round(), 1);
        assert_eq!(game.display().score_text, "click to stop");
        assert_eq!(game.display().result_text, "don't overshoot!");
        assert!(game.last_evaluation().is_none());
    }

    #[test]
    fn test_advance_shrinks_by_rate_times_delta() {
        let mut game = new_game();
        assert!(game.advance(2.0).is_none());
        // 5.0 - 0.05 * 2.0
        assert!((game.scale() - 4.9).abs() < 1e-12);
        assert!((game.target().scale - 4.9).abs() < 1e-12);
    }

    #[test]
    fn test_advance_ignores_negative_and_nan_delta() {
        let mut game = new_game();
        game.advance(-10.0);
        assert!((game.scale() - 5.0).abs() < f64::EPSILON);
        game.advance(f64::NAN);
        assert!((game.scale() - 5.0).abs() < f64::EPSILON);
        game.advance(f64::INFINITY);
        assert!((game.scale() - 5.0).abs() < f64::EPSILON);
        assert!(game.is_active());
    }

    #[test]
    fn test_large_delta_auto_stops_at_zero() {
        let mut game = new_game();
        let evaluation = game.advance(1_000.0).expect("round should end");
        assert_eq!(game.phase(), Phase::Finished);
        assert_eq!(game.scale(), 0.0);
        assert_eq!(game.target().scale, 0.0);
        assert_eq!(evaluation.grade, Grade::Overshot);
        assert_eq!(game.display().score_text, "score: 0");
    }

    #[test]
    fn test_advance_is_noop_when_finished() {
        let mut game = new_game();
        game.advance(10.0);
        game.request_stop();
        let scale = game.scale();
        assert!(game.advance(10.0).is_none());
        assert_eq!(game.scale(), scale);
    }

    #[test]
    fn test_stop_at_target_is_perfect() {
        let mut game = new_game();
        // (5.0 - 0.266) / 0.05 seconds of shrinking lands near the target;
        // force the exact value to check the perfect branch
        game.scale = TARGET_SCALE;
        let evaluation = game.request_stop().unwrap();
        assert_eq!(evaluation.score, 100.0);
        assert_eq!(evaluation.grade, Grade::Perfect);
        assert_eq!(game.display().score_text, "score: 100");
        assert_eq!(
            game.display().result_text,
            format!("perfect\n{}", RESTART_HINT)
        );
    }

    #[test]
    fn test_second_stop_does_not_rescore() {
        let mut game = new_game();
        game.scale = 0.3;
        assert!(game.request_stop().is_some());
        let texts = game.display().clone();
        let evaluation = *game.last_evaluation().unwrap();

        assert!(game.request_stop().is_none());
        assert_eq!(game.display(), &texts);
        assert_eq!(game.last_evaluation(), Some(&evaluation));
        assert!((game.scale() - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_restart_only_after_finish() {
        let mut game = new_game();
        game.advance(1.0);
        assert!(!game.request_restart());
        assert_eq!(game.round(), 1);
        assert!(game.scale() < 5.0);

        game.request_stop();
        assert!(game.request_restart());
        assert_eq!(game.phase(), Phase::Active);
        assert!((game.scale() - 5.0).abs() < f64::EPSILON);
        assert_eq!(game.round(), 2);
        assert_eq!(game.display().score_text, "click to stop");
        // The previous result stays available
        assert!(game.last_evaluation().is_some());
    }

    #[test]
    fn test_tick_shrinks_before_honouring_stop() {
        let mut game = new_game();
        let mut clock = FixedClock::new(1.0);
        let mut input = ScriptedInput::new().at(0, InputEvent::StopPressed);

        let evaluation = game.tick(&mut clock, &mut input).unwrap();
        assert!((evaluation.scale - 4.95).abs() < 1e-12);
        assert_eq!(game.phase(), Phase::Finished);
    }

    #[test]
    fn test_tick_ignores_restart_while_active_and_stop_while_finished() {
        let mut game = new_game();
        let mut clock = FixedClock::new(0.5);
        let mut input = ScriptedInput::new()
            .at(0, InputEvent::RestartPressed)
            .at(1, InputEvent::StopPressed)
            .at(2, InputEvent::StopPressed)
            .at(3, InputEvent::RestartPressed);

        assert!(game.tick(&mut clock, &mut input).is_none());
        assert_eq!(game.round(), 1);

        assert!(game.tick(&mut clock, &mut input).is_some());
        let stopped_at = game.scale();

        assert!(game.tick(&mut clock, &mut input).is_none());
        assert_eq!(game.scale(), stopped_at);

        assert!(game.tick(&mut clock, &mut input).is_none());
        assert_eq!(game.round(), 2);
        assert!(game.is_active());
        assert!((game.scale() - 5.0).abs() < f64::EPSILON);
    }
}
