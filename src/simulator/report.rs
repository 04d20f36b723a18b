//! Simulation report generation.

use crate::core::config::GameConfig;
use crate::core::scoring::{format_score, Evaluation};
use crate::core::session::SessionStats;
use serde::Serialize;

/// Outcome of one simulated round.
#[derive(Debug, Clone, Serialize)]
pub struct RoundReport {
    /// Requested stop time in seconds; `None` for an unattended round
    pub stop_at: Option<f64>,
    pub ticks: u64,
    pub elapsed_seconds: f64,
    /// True when the painting hit the lower bound before any stop
    pub auto_stopped: bool,
    pub evaluation: Evaluation,
    /// Score slot text as the player would have seen it
    pub score_text: String,
    /// Result slot text as the player would have seen it
    pub result_text: String,
}

/// Results from a simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub game: GameConfig,
    pub frame_ms: u64,
    pub rounds: Vec<RoundReport>,
    pub session: SessionStats,
}

impl SimReport {
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SHRINKFIT ROUND REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Initial scale: {}  Shrink rate: {}/s  Target: {}  Frame: {} ms\n\n",
            self.game.initial_scale,
            self.game.shrink_rate,
            self.game.target_scale(),
            self.frame_ms
        ));

        report.push_str(&format!(
            "{:>9} {:>8} {:>9} {:>8}   {}\n",
            "Stop (s)", "Ticks", "Scale", "Score", "Result"
        ));
        report.push_str("───────────────────────────────────────────────────────────────\n");
        for round in &self.rounds {
            let stop = match round.stop_at {
                Some(seconds) => format!("{:.2}", seconds),
                None => "-".to_string(),
            };
            let result = if round.auto_stopped {
                format!("{} (auto-stop)", round.evaluation.grade.message())
            } else {
                round.evaluation.grade.message().to_string()
            };
            report.push_str(&format!(
                "{:>9} {:>8} {:>9.4} {:>8}   {}\n",
                stop,
                round.ticks,
                round.evaluation.scale,
                format_score(round.evaluation.score),
                result
            ));
        }
        report.push('\n');

        report.push_str(&format!("Rounds: {}", self.session.rounds()));
        if let Some(best) = self.session.best() {
            report.push_str(&format!(
                "  Best: {} ({})",
                format_score(best.score),
                best.grade.message()
            ));
        }
        if let Some(average) = self.session.average_score() {
            report.push_str(&format!("  Average: {}", format_score(average)));
        }
        report.push('\n');

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
