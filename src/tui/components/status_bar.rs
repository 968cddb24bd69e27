//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::round::Phase;
use crate::tui::app::App;

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (feed_label, feed_color) = match (app.round.current_quote(), app.feed_live) {
        (None, _) => ("Waiting for feed", Color::Yellow),
        (Some(_), true) => ("Live", Color::Green),
        (Some(_), false) => ("Synthesized", Color::Yellow),
    };

    let phase_label = match app.round.phase() {
        Phase::Idle => "Idle".to_string(),
        Phase::Locked { settling: true, .. } => "Settling".to_string(),
        Phase::Locked {
            prediction: Some(p),
            ..
        } => format!("Locked, predicted {}", p.label()),
        Phase::Locked { .. } => "Locked".to_string(),
        Phase::Result { .. } => "Result".to_string(),
    };

    let notice_span = if let Some(ref notice) = app.notice {
        Span::styled(
            format!(" {} ", notice.message),
            Style::default().fg(Color::Red),
        )
    } else {
        Span::raw("")
    };

    let spans = vec![
        Span::styled(
            format!(" {feed_label} "),
            Style::default().fg(feed_color),
        ),
        Span::raw("│"),
        Span::styled(format!(" {phase_label} "), Style::default().fg(Color::Cyan)),
        Span::raw("│"),
        Span::styled(
            format!(" {}s round ", app.round.duration_secs()),
            Style::default().fg(Color::White),
        ),
        Span::raw("│"),
        notice_span,
    ];

    let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
