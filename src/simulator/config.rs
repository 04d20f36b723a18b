//! Simulation configuration.

use crate::core::config::{ConfigError, GameConfig};

/// Most rounds a single run may queue.
pub const MAX_SIM_ROUNDS: usize = 100_000;
/// Most frames a whole run may take if no round is stopped early.
pub const MAX_SIM_TICKS: f64 = 100_000_000.0;

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Round parameters, as for interactive play
    pub game: GameConfig,

    /// Fixed frame step in milliseconds
    pub frame_ms: u64,

    /// Seconds after round start at which to stop; `None` waits for auto-stop
    pub stop_times: Vec<Option<f64>>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            frame_ms: 16,
            stop_times: Vec::new(),
        }
    }
}

impl SimConfig {
    /// Add stop times `from, from + step, ...` up to and including `to`.
    pub fn add_sweep(&mut self, from: f64, to: f64, step: f64) -> Result<(), ConfigError> {
        if !(from.is_finite() && to.is_finite() && step.is_finite()) || step <= 0.0 || to < from {
            return Err(ConfigError::Invalid {
                field: "sweep",
                reason: "expected <from> <to> <step> with from <= to and step > 0".to_string(),
            });
        }
        // Integer stepping keeps float drift from dropping the last point
        let count = ((to - from) / step + 1e-9).floor();
        let room = MAX_SIM_ROUNDS.saturating_sub(self.stop_times.len());
        if count + 1.0 > room as f64 {
            return Err(too_many_rounds());
        }
        let count = count as u64;
        for i in 0..=count {
            self.stop_times.push(Some(from + i as f64 * step));
        }
        Ok(())
    }

    /// Rounds to play; an empty list means a single unattended round.
    pub fn rounds(&self) -> Vec<Option<f64>> {
        if self.stop_times.is_empty() {
            vec![None]
        } else {
            self.stop_times.clone()
        }
    }

    /// Upper estimate of the frames an unattended round takes to auto-stop.
    pub fn round_ticks(&self) -> f64 {
        let seconds = self.game.initial_scale / self.game.shrink_rate;
        seconds * 1000.0 / self.frame_ms as f64
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game.validate()?;
        if self.frame_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "dt",
                reason: "frame step must be at least 1 ms".to_string(),
            });
        }
        if self.stop_times.len() > MAX_SIM_ROUNDS {
            return Err(too_many_rounds());
        }
        if self.rounds().len() as f64 * self.round_ticks() > MAX_SIM_TICKS {
            return Err(ConfigError::Invalid {
                field: "dt",
                reason: format!("the run could take over {} frames", MAX_SIM_TICKS),
            });
        }
        if let Some(bad) = self
            .stop_times
            .iter()
            .flatten()
            .find(|t| !t.is_finite() || **t < 0.0)
        {
            return Err(ConfigError::Invalid {
                field: "stop-at",
                reason: format!("{} is not a non-negative number of seconds", bad),
            });
        }
        Ok(())
    }
}

fn too_many_rounds() -> ConfigError {
    ConfigError::Invalid {
        field: "rounds",
        reason: format!("at most {} rounds per run", MAX_SIM_ROUNDS),
    }
}
