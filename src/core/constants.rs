// Round geometry
pub const DEFAULT_INITIAL_SCALE: f64 = 5.0;
pub const TARGET_SCALE: f64 = 0.266;
pub const LOWER_BOUND: f64 = 0.001;

// Timing
pub const DEFAULT_SHRINK_RATE: f64 = 0.05; // scale units per second
pub const MIN_SHRINK_RATE: f64 = 0.001;
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;
pub const MAX_FRAME_INTERVAL_MS: u64 = 1000;

// Scoring: points lost per unit of scale left above the target
pub const SCORE_PENALTY_PER_UNIT: f64 = 150.0;
pub const MAX_SCORE: f64 = 100.0;
pub const EXCELLENT_THRESHOLD: f64 = 90.0;
pub const PRETTY_GOOD_THRESHOLD: f64 = 80.0;
pub const FAIR_THRESHOLD: f64 = 60.0;

// Display text
pub const PROMPT_TEXT: &str = "click to stop";
pub const HINT_TEXT: &str = "don't overshoot!";
pub const SCORE_PREFIX: &str = "score: ";
pub const RESTART_HINT: &str = "press R to restart";

// Session history kept for the info panel
pub const RECENT_ROUNDS: usize = 5;
