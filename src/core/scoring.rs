//! Scoring policy applied when a round stops.
//!
//! Stopping below the target is an overshoot and scores zero. Otherwise every
//! unit of scale left above the target costs [`SCORE_PENALTY_PER_UNIT`]
//! points. The grade is chosen from the raw score first; a raw score below
//! zero is then clamped to zero and the grade replaced with
//! [`Grade::Unrecognizable`].

use super::constants::{
    EXCELLENT_THRESHOLD, FAIR_THRESHOLD, MAX_SCORE, PRETTY_GOOD_THRESHOLD, RESTART_HINT,
    SCORE_PENALTY_PER_UNIT, SCORE_PREFIX,
};
use serde::{Deserialize, Serialize};

/// Verdict shown next to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Perfect,
    Excellent,
    PrettyGood,
    Fair,
    TryHarder,
    Overshot,
    Unrecognizable,
}

impl Grade {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Excellent => "excellent",
            Self::PrettyGood => "pretty good",
            Self::Fair => "fair",
            Self::TryHarder => "try harder",
            Self::Overshot => "overshot",
            Self::Unrecognizable => "unrecognizable",
        }
    }

    /// Grade for a raw (unclamped) score at or above the target.
    pub fn classify(score: f64) -> Self {
        if score == MAX_SCORE {
            Self::Perfect
        } else if score > EXCELLENT_THRESHOLD {
            Self::Excellent
        } else if score > PRETTY_GOOD_THRESHOLD {
            Self::PrettyGood
        } else if score > FAIR_THRESHOLD {
            Self::Fair
        } else {
            Self::TryHarder
        }
    }
}

/// Outcome of stopping a round at `scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Scale of the painting when the round stopped.
    pub scale: f64,
    /// `scale - target_scale`; negative means overshot.
    pub difference: f64,
    /// Final score in `[0, 100]`.
    pub score: f64,
    pub grade: Grade,
}

/// Score a stop at `scale` against `target_scale`.
pub fn evaluate_stop(scale: f64, target_scale: f64) -> Evaluation {
    let difference = scale - target_scale;

    let (score, grade) = if difference < 0.0 {
        (0.0, Grade::Overshot)
    } else {
        let raw = MAX_SCORE - difference * SCORE_PENALTY_PER_UNIT;
        let grade = Grade::classify(raw);
        if raw < 0.0 {
            (0.0, Grade::Unrecognizable)
        } else {
            (raw, grade)
        }
    };

    Evaluation {
        scale,
        difference,
        score,
        grade,
    }
}

/// Plain decimal with at most two fractional digits, trailing zeros trimmed.
///
/// Only an exact hit reads as a full score; anything short of it is cut to
/// `99.99` rather than rounded up.
pub fn format_score(score: f64) -> String {
    let shown = if score < MAX_SCORE && (score * 100.0).round() >= MAX_SCORE * 100.0 {
        (score * 100.0).floor() / 100.0
    } else {
        score
    };
    let text = format!("{:.2}", shown);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Text for the score slot, e.g. `score: 94.9`.
pub fn score_text(evaluation: &Evaluation) -> String {
    format!("{}{}", SCORE_PREFIX, format_score(evaluation.score))
}

/// Text for the result slot: verdict, then the restart instruction.
pub fn result_text(evaluation: &Evaluation) -> String {
    format!("{}\n{}", evaluation.grade.message(), RESTART_HINT)
}
