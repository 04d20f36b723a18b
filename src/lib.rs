//! Shrinkfit - stop the shrinking painting when it fits the frame.
//!
//! This module exposes the round logic for testing and for the binaries.

pub mod build_info;
pub mod core;
pub mod input;
pub mod simulator;
pub mod utils;

pub use crate::core::{
    evaluate_stop, ConfigError, Evaluation, GameConfig, Grade, InputEvent, Phase, SessionStats,
    ShrinkGame,
};
