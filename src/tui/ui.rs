//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::round::Phase;

use super::app::App;
use super::components::{countdown_gauge, duration_slider, price_panel, result_panel, status_bar};

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Status bar
            Constraint::Min(8),    // Round panel
            Constraint::Length(3), // Round length slider
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    render_header(frame, main_layout[0]);
    status_bar::render(frame, main_layout[1], app);
    render_round(frame, main_layout[2], app);
    duration_slider::render(frame, main_layout[3], app);
    render_keybindings(frame, main_layout[4], app);
}

/// Renders the title block.
fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "BTC",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Price Lock", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            "  -  predict whether Bitcoin goes up or down",
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .centered();

    let block = Block::default().borders(Borders::ALL);
    let para = Paragraph::new(title).block(block);
    frame.render_widget(para, area);
}

/// Renders the phase-dependent center panel.
fn render_round(frame: &mut Frame, area: Rect, app: &App) {
    match app.round.phase() {
        Phase::Idle => {
            price_panel::render(
                frame,
                area,
                " Current BTC Price ",
                app.round.current_quote(),
                true,
            );
        }
        Phase::Locked {
            locked, settling, ..
        } => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(4), Constraint::Length(4)])
                .split(area);

            price_panel::render(frame, rows[0], " Locked BTC Price ", Some(*locked), false);
            countdown_gauge::render(frame, rows[1], app, *settling);
        }
        Phase::Result {
            locked,
            settled,
            outcome,
            ..
        } => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(5), Constraint::Min(4)])
                .split(area);

            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(rows[0]);

            price_panel::render(frame, columns[0], " Start Price ", Some(*locked), false);
            price_panel::render(frame, columns[1], " End Price ", Some(*settled), false);
            result_panel::render(frame, rows[1], outcome);
        }
    }
}

/// Renders the bottom help line for the current phase.
fn render_keybindings(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.round.phase() {
        Phase::Idle => "↑ lock Up  ↓ lock Down  Enter lock  ←/→ round length  q quit",
        Phase::Locked { .. } => "waiting for the countdown  q quit",
        Phase::Result { .. } => "r play again  q quit",
    };

    let para = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )))
    .centered();
    frame.render_widget(para, area);
}
