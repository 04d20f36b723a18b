//! Round state machine, scoring, and the ports it drives.

pub mod config;
pub mod constants;
pub mod ports;
pub mod scoring;
pub mod session;
pub mod shrink_game;

pub use config::{ConfigError, GameConfig};
pub use ports::{
    Clock, DisplaySurface, FixedClock, FrameClock, InputEvent, InputSource, ScaleReadout,
    ScaleTarget, ScriptedInput, TextPanel,
};
pub use scoring::{evaluate_stop, format_score, Evaluation, Grade};
pub use session::SessionStats;
pub use shrink_game::{Phase, ShrinkGame};
