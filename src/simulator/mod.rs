//! Headless round runner.
//!
//! Plays rounds with a fixed frame step and scripted stop times, using the
//! same `ShrinkGame` the terminal host drives, so results match real play
//! at that frame rate.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RoundReport, SimReport};
pub use runner::{play_round, run_simulation};
