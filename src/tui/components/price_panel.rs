//! Price display panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::models::{Quote, format_usd};

/// Renders a bordered panel showing one price.
///
/// `pulse` marks the price as continuously updating (the idle live view);
/// a synthesized quote is flagged so it cannot pass for market data.
pub fn render(frame: &mut Frame, area: Rect, title: &str, quote: Option<Quote>, pulse: bool) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let line = match quote {
        Some(quote) => {
            let price_style = if pulse {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };

            let mut spans = vec![Span::styled(format_usd(quote.usd), price_style)];
            if pulse {
                spans.push(Span::styled(" ●", Style::default().fg(Color::Green)));
            }
            if !quote.is_live() {
                spans.push(Span::styled(" SYNTH", Style::default().fg(Color::Yellow)));
            }
            Line::from(spans)
        }
        None => Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let para = Paragraph::new(line).centered().block(block);
    frame.render_widget(para, area);
}
