//! Round length slider.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Gauge},
};

use crate::round::{MAX_DURATION_SECS, MIN_DURATION_SECS, Phase};
use crate::tui::app::App;

/// Renders the round length as a slider over the 15s–60s range.
///
/// Dimmed while a round is in flight, when the length cannot change.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let adjustable = matches!(app.round.phase(), Phase::Idle);

    let duration = app.round.duration_secs();
    let span = (MAX_DURATION_SECS - MIN_DURATION_SECS) as f64;
    let ratio = ((duration - MIN_DURATION_SECS) as f64 / span).clamp(0.0, 1.0);

    let color = if adjustable {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(format!(
            " Round Length ({MIN_DURATION_SECS}s to {MAX_DURATION_SECS}s) "
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(format!("{duration} seconds"));
    frame.render_widget(gauge, area);
}
