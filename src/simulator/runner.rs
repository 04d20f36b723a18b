//! Round runner driving the real `ShrinkGame` with a fixed clock.

use super::config::SimConfig;
use super::report::{RoundReport, SimReport};
use crate::core::ports::{FixedClock, InputEvent, ScaleReadout, ScriptedInput, TextPanel};
use crate::core::session::SessionStats;
use crate::core::shrink_game::ShrinkGame;

pub type SimGame = ShrinkGame<TextPanel, ScaleReadout>;

/// Tick index on which a stop requested `stop_at` seconds into the round
/// lands: the first tick whose accumulated time reaches it.
pub fn stop_tick(stop_at: f64, step_seconds: f64) -> u64 {
    let ticks = (stop_at / step_seconds - 1e-6).ceil().max(1.0);
    ticks as u64 - 1
}

/// Play one round to completion. A finished game is restarted first.
pub fn play_round(game: &mut SimGame, frame_ms: u64, stop_at: Option<f64>) -> RoundReport {
    if !game.is_active() {
        game.request_restart();
    }

    let mut clock = FixedClock::from_millis(frame_ms);
    let mut input = ScriptedInput::new();
    if let Some(seconds) = stop_at {
        input.push(
            stop_tick(seconds, clock.step_seconds),
            InputEvent::StopPressed,
        );
    }

    // Ends at the latest when the painting reaches the lower bound
    let evaluation = loop {
        if let Some(evaluation) = game.tick(&mut clock, &mut input) {
            break evaluation;
        }
    };

    let ticks = input.ticks_elapsed();
    RoundReport {
        stop_at,
        ticks,
        elapsed_seconds: ticks as f64 * clock.step_seconds,
        auto_stopped: evaluation.scale == 0.0,
        evaluation,
        score_text: game.display().score_text.clone(),
        result_text: game.display().result_text.clone(),
    }
}

/// Run every configured round on one game, restarting between rounds.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut game = ShrinkGame::new(config.game, TextPanel::default(), ScaleReadout::default());
    let mut session = SessionStats::new();
    let mut rounds = Vec::new();

    for stop_at in config.rounds() {
        let round = play_round(&mut game, config.frame_ms, stop_at);
        session.record(&round.evaluation);
        rounds.push(round);
    }

    SimReport {
        game: config.game,
        frame_ms: config.frame_ms,
        rounds,
        session,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::core::scoring::Grade;

    fn new_game(config: GameConfig) -> SimGame {
        ShrinkGame::new(config, TextPanel::default(), ScaleReadout::default())
    }

    #[test]
    fn test_stop_tick() {
        assert_eq!(stop_tick(0.0, 0.1), 0);
        assert_eq!(stop_tick(0.1, 0.1), 0);
        assert_eq!(stop_tick(0.15, 0.1), 1);
        assert_eq!(stop_tick(1.0, 0.25), 3);
    }

    #[test]
    fn test_unattended_round_auto_stops() {
        let config = GameConfig {
            shrink_rate: 1.0,
            ..Default::default()
        };
        let mut game = new_game(config);
        let round = play_round(&mut game, 100, None);

        assert!(round.auto_stopped);
        assert_eq!(round.evaluation.grade, Grade::Overshot);
        assert_eq!(round.score_text, "score: 0");
        // 5.0 at 1.0/s in 0.1 s steps reaches the 0.001 bound on the 50th tick
        assert_eq!(round.ticks, 50);
    }

    #[test]
    fn test_timed_stop_scores_against_the_target() {
        // Shrinks 1.0 per second: at 4.7 s the painting is 0.3
        let config = GameConfig {
            shrink_rate: 1.0,
            ..Default::default()
        };
        let mut game = new_game(config);
        let round = play_round(&mut game, 100, Some(4.7));

        assert!(!round.auto_stopped);
        assert_eq!(round.ticks, 47);
        assert!((round.evaluation.scale - 0.3).abs() < 1e-6);
        assert_eq!(round.evaluation.grade, Grade::Excellent);
        assert!(round.result_text.starts_with("excellent"));
    }

    #[test]
    fn test_run_simulation_restarts_between_rounds() {
        let config = SimConfig {
            game: GameConfig {
                shrink_rate: 1.0,
                ..Default::default()
            },
            frame_ms: 100,
            stop_times: vec![Some(4.7), None, Some(1.0)],
        };
        let report = run_simulation(&config);

        assert_eq!(report.rounds.len(), 3);
        assert_eq!(report.session.rounds(), 3);
        assert!(!report.rounds[0].auto_stopped);
        assert!(report.rounds[1].auto_stopped);
        // 4.0 left above a 0.266 target clamps to zero
        assert_eq!(report.rounds[2].evaluation.grade, Grade::Unrecognizable);
        assert_eq!(report.session.best().unwrap().grade, Grade::Excellent);
    }
}
