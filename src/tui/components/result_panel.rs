//! Round result display.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::round::{Direction, Outcome};

/// Renders the outcome banner for a finished round.
pub fn render(frame: &mut Frame, area: Rect, outcome: &Outcome) {
    let (arrow, verdict, color) = match outcome.direction {
        Direction::Up => ("▲", "Price Went Up", Color::Green),
        Direction::Down => ("▼", "Price Went Down", Color::Red),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{arrow} {verdict}"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(vec![
            Span::raw("Change: "),
            Span::styled(
                format!("{:+.2} USD ({:+.2}%)", outcome.delta, outcome.percent),
                Style::default().fg(color),
            ),
        ])
        .centered(),
    ];

    if let Some(correct) = outcome.prediction_correct {
        let badge = if correct {
            Span::styled(
                " Correct Prediction! ",
                Style::default().fg(Color::Black).bg(Color::Green),
            )
        } else {
            Span::styled(
                " Incorrect Prediction ",
                Style::default().fg(Color::White).bg(Color::Red),
            )
        };
        lines.push(Line::from(Span::raw("")));
        lines.push(Line::from(badge).centered());
    }

    let block = Block::default()
        .title(" Result ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let para = Paragraph::new(lines).block(block);
    frame.render_widget(para, area);
}
