//! UI rendering for the shrinking painting.

use super::game_common::{
    create_game_layout, grade_color, render_info_panel_frame, render_status_bar,
};
use super::TerminalGame;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Rectangle},
        Paragraph,
    },
    Frame,
};
use shrinkfit::core::{format_score, SessionStats};

const INFO_PANEL_WIDTH: u16 = 24;
/// Empty space around the full-size painting, as a fraction of its size.
const VIEW_MARGIN: f64 = 0.1;

/// Render the whole game screen.
pub fn render_shrink_game(
    frame: &mut Frame,
    area: Rect,
    game: &TerminalGame,
    stats: &SessionStats,
) {
    let layout = create_game_layout(
        frame,
        area,
        " Shrinkfit ",
        Color::Cyan,
        INFO_PANEL_WIDTH,
    );

    render_header(frame, layout.header, game);
    render_painting(frame, layout.content, game);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game, stats);
}

/// Score slot on the first line, result slot below it.
fn render_header(frame: &mut Frame, area: Rect, game: &TerminalGame) {
    let panel = game.display();
    let accent = match game.last_evaluation() {
        Some(evaluation) if !game.is_active() => grade_color(evaluation.grade),
        _ => Color::White,
    };

    let mut lines = vec![Line::from(Span::styled(
        panel.score_text.as_str(),
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    ))];
    for (i, text) in panel.result_text.lines().enumerate() {
        // Anything after the verdict is the restart instruction
        let style = if i == 0 {
            Style::default().fg(accent)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Axis bounds that keep squares square.
///
/// Braille cells hold 2x4 dots and a terminal cell is about twice as tall as
/// it is wide, so one dot covers the same distance on both axes.
pub fn view_bounds(area: Rect, initial_scale: f64) -> ([f64; 2], [f64; 2]) {
    let span = initial_scale * (1.0 + VIEW_MARGIN);
    let dots_x = (area.width.max(1) as f64) * 2.0;
    let dots_y = (area.height.max(1) as f64) * 4.0;
    let per_dot = (span / dots_x).max(span / dots_y);
    let half_x = per_dot * dots_x / 2.0;
    let half_y = per_dot * dots_y / 2.0;
    ([-half_x, half_x], [-half_y, half_y])
}

fn centered_square(side: f64, color: Color) -> Rectangle {
    Rectangle {
        x: -side / 2.0,
        y: -side / 2.0,
        width: side,
        height: side,
        color,
    }
}

fn render_painting(frame: &mut Frame, area: Rect, game: &TerminalGame) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let config = game.config();
    let (x_bounds, y_bounds) = view_bounds(area, config.initial_scale);
    let painting_side = game.target().scale;
    let frame_side = config.target_scale();
    let painting_color = match game.last_evaluation() {
        Some(evaluation) if !game.is_active() => grade_color(evaluation.grade),
        _ => Color::Cyan,
    };

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(move |ctx| {
            ctx.draw(&centered_square(frame_side, Color::Yellow));
            if painting_side > 0.0 {
                ctx.draw(&centered_square(painting_side, painting_color));
            }
        });
    frame.render_widget(canvas, area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &TerminalGame) {
    if game.is_active() {
        render_status_bar(
            frame,
            area,
            "Stop it when it fits the frame",
            Color::Cyan,
            &[("[Space/Click]", "Stop"), ("[Q]", "Quit")],
        );
    } else {
        render_status_bar(
            frame,
            area,
            "Round over",
            Color::Yellow,
            &[("[R]", "Restart"), ("[Q]", "Quit")],
        );
    }
}

fn info_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {}", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &TerminalGame, stats: &SessionStats) {
    let inner = render_info_panel_frame(frame, area);

    let mut lines = vec![
        info_line("Round:   ", game.round().to_string()),
        info_line("Played:  ", stats.rounds().to_string()),
        info_line(
            "Best:    ",
            stats
                .best()
                .map(|best| format_score(best.score))
                .unwrap_or_else(|| "-".to_string()),
        ),
        info_line(
            "Average: ",
            stats
                .average_score()
                .map(format_score)
                .unwrap_or_else(|| "-".to_string()),
        ),
    ];

    // The painting's exact size is only revealed once the round is over
    match game.last_evaluation() {
        Some(last) if !game.is_active() => {
            lines.push(Line::from(""));
            lines.push(info_line("Stopped: ", format!("{:.3}", last.scale)));
            lines.push(info_line(
                "Target:  ",
                format!("{:.3}", game.config().target_scale()),
            ));
        }
        _ => {}
    }

    let recent: Vec<_> = stats.recent().collect();
    if !recent.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Recent",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::UNDERLINED),
        )));
        for evaluation in recent.iter().rev() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {:>6} ", format_score(evaluation.score)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    evaluation.grade.message(),
                    Style::default().fg(grade_color(evaluation.grade)),
                ),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
