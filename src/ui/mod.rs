pub mod game_common;
pub mod shrink_scene;

use ratatui::Frame;
use shrinkfit::core::{ScaleReadout, SessionStats, ShrinkGame, TextPanel};

/// The game as wired up for the terminal: both outputs are in-memory values
/// the renderer reads each frame.
pub type TerminalGame = ShrinkGame<TextPanel, ScaleReadout>;

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, game: &TerminalGame, stats: &SessionStats) {
    let size = frame.size();
    shrink_scene::render_shrink_game(frame, size, game, stats);
}
