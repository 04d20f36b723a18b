//! Per-run statistics. Nothing here outlives the process.

use super::constants::RECENT_ROUNDS;
use super::scoring::Evaluation;
use serde::Serialize;
use std::collections::VecDeque;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionStats {
    rounds: u32,
    total_score: f64,
    best: Option<Evaluation>,
    recent: VecDeque<Evaluation>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, evaluation: &Evaluation) {
        self.rounds += 1;
        self.total_score += evaluation.score;

        // Ties keep the earlier round
        let is_best = self
            .best
            .as_ref()
            .map_or(true, |best| evaluation.score > best.score);
        if is_best {
            self.best = Some(*evaluation);
        }

        if self.recent.len() == RECENT_ROUNDS {
            self.recent.pop_front();
        }
        self.recent.push_back(*evaluation);
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn best(&self) -> Option<&Evaluation> {
        self.best.as_ref()
    }

    pub fn average_score(&self) -> Option<f64> {
        (self.rounds > 0).then(|| self.total_score / self.rounds as f64)
    }

    /// Most recent rounds, oldest first.
    pub fn recent(&self) -> impl Iterator<Item = &Evaluation> {
        self.recent.iter()
    }
}
