//! Terminal input for the shrink game.
//!
//! Maps crossterm key and mouse events onto game events, plus the host-level
//! quit action the game itself never sees.

use crate::core::ports::{InputEvent, InputSource};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// What a single terminal event means to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    Game(InputEvent),
    Quit,
    Ignore,
}

/// Space, Enter, or a left click stops. `r` restarts. `q`, Esc, or Ctrl+C
/// quits. Key releases and repeats are ignored so input stays edge-triggered.
pub fn map_event(event: &Event) -> HostAction {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => HostAction::Game(InputEvent::StopPressed),
            _ => HostAction::Ignore,
        },
        _ => HostAction::Ignore,
    }
}

fn map_key(key: &KeyEvent) -> HostAction {
    if key.kind != KeyEventKind::Press {
        return HostAction::Ignore;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => HostAction::Quit,
        KeyCode::Char(' ') | KeyCode::Enter => HostAction::Game(InputEvent::StopPressed),
        KeyCode::Char('r') | KeyCode::Char('R') => HostAction::Game(InputEvent::RestartPressed),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => HostAction::Quit,
        _ => HostAction::Ignore,
    }
}

/// Collects game events between frames and hands them to the game on tick.
#[derive(Debug, Default)]
pub struct TerminalInput {
    pending: Vec<InputEvent>,
    quit_requested: bool,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one terminal event.
    pub fn handle(&mut self, event: &Event) {
        match map_event(event) {
            HostAction::Game(game_event) => self.pending.push(game_event),
            HostAction::Quit => self.quit_requested = true,
            HostAction::Ignore => {}
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

impl InputSource for TerminalInput {
    fn drain_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }
}
