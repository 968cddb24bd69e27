//! Countdown progress gauge.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Gauge},
};

use crate::tui::app::App;

/// Renders the time-remaining gauge for a locked round.
pub fn render(frame: &mut Frame, area: Rect, app: &App, settling: bool) {
    let block = Block::default()
        .title(" Time Remaining ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if settling {
        let gauge = Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(Color::Yellow))
            .ratio(0.0)
            .label("fetching result price...");
        frame.render_widget(gauge, area);
        return;
    }

    let remaining = app
        .countdown_remaining
        .unwrap_or_else(|| app.round.duration_secs());
    let ratio = (app.countdown_progress / 100.0).clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(Color::Yellow))
        .ratio(ratio)
        .label(format!("{remaining}s"));
    frame.render_widget(gauge, area);
}
