//! Collaborators the shrink game talks to.
//!
//! The game never reads back from its outputs: text goes to a
//! [`DisplaySurface`], the painting size goes to a [`ScaleTarget`], and time
//! and input arrive through [`Clock`] and [`InputSource`] once per frame.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Supplies seconds elapsed since the previous tick.
pub trait Clock {
    fn delta_time(&mut self) -> f64;
}

/// Edge-triggered player actions understood by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    StopPressed,
    RestartPressed,
}

/// Hands over the events observed since the last call.
pub trait InputSource {
    fn drain_events(&mut self) -> Vec<InputEvent>;
}

/// Two independent text slots. Each call overwrites the previous value.
pub trait DisplaySurface {
    fn set_score_text(&mut self, text: &str);
    fn set_result_text(&mut self, text: &str);
}

/// Write-only sink for the painting's uniform scale.
pub trait ScaleTarget {
    fn set_uniform_scale(&mut self, scale: f64);
}

/// Constant step per tick. Used by the headless runner and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock {
    pub step_seconds: f64,
}

impl FixedClock {
    pub fn new(step_seconds: f64) -> Self {
        Self { step_seconds }
    }

    pub fn from_millis(step_ms: u64) -> Self {
        Self::new(Duration::from_millis(step_ms).as_secs_f64())
    }
}

impl Clock for FixedClock {
    fn delta_time(&mut self) -> f64 {
        self.step_seconds
    }
}

/// Wall-clock delta between successive ticks.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FrameClock {
    fn delta_time(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed.as_secs_f64()
    }
}

/// Replays events at fixed tick indices (0-based, one index per drain).
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    tick: u64,
    script: HashMap<u64, Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `event` to be reported on the `tick`-th drain.
    pub fn at(mut self, tick: u64, event: InputEvent) -> Self {
        self.push(tick, event);
        self
    }

    pub fn push(&mut self, tick: u64, event: InputEvent) {
        self.script.entry(tick).or_default().push(event);
    }

    /// Number of drains performed so far.
    pub fn ticks_elapsed(&self) -> u64 {
        self.tick
    }
}

impl InputSource for ScriptedInput {
    fn drain_events(&mut self) -> Vec<InputEvent> {
        let events = self.script.remove(&self.tick).unwrap_or_default();
        self.tick += 1;
        events
    }
}

/// In-memory [`DisplaySurface`] holding the current text of both slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextPanel {
    pub score_text: String,
    pub result_text: String,
}

impl DisplaySurface for TextPanel {
    fn set_score_text(&mut self, text: &str) {
        self.score_text.clear();
        self.score_text.push_str(text);
    }

    fn set_result_text(&mut self, text: &str) {
        self.result_text.clear();
        self.result_text.push_str(text);
    }
}

/// In-memory [`ScaleTarget`] remembering the last scale written.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScaleReadout {
    pub scale: f64,
}

impl ScaleTarget for ScaleReadout {
    fn set_uniform_scale(&mut self, scale: f64) {
        self.scale = scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_constant_step() {
        let mut clock = FixedClock::from_millis(250);
        assert!((clock.delta_time() - 0.25).abs() < 1e-12);
        assert!((clock.delta_time() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_frame_clock_is_non_negative() {
        let mut clock = FrameClock::new();
        assert!(clock.delta_time() >= 0.0);
        assert!(clock.delta_time() >= 0.0);
    }

    #[test]
    fn test_scripted_input_reports_on_its_tick_only() {
        let mut input = ScriptedInput::new()
            .at(1, InputEvent::StopPressed)
            .at(3, InputEvent::RestartPressed);

        assert!(input.drain_events().is_empty());
        assert_eq!(input.drain_events(), vec![InputEvent::StopPressed]);
        assert!(input.drain_events().is_empty());
        assert_eq!(input.drain_events(), vec![InputEvent::RestartPressed]);
        assert!(input.drain_events().is_empty());
        assert_eq!(input.ticks_elapsed(), 5);
    }

    #[test]
    fn test_text_panel_overwrites() {
        let mut panel = TextPanel::default();
        panel.set_score_text("first");
        panel.set_score_text("second");
        panel.set_result_text("result");
        assert_eq!(panel.score_text, "second");
        assert_eq!(panel.result_text, "result");
    }
}
