//! Frame layout: status header, board, message log, key help.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{terminal::Tui, widgets};
use crate::app::{MatchOutcome, MatchSession};

pub fn render(terminal: &mut Tui, session: &MatchSession) -> Result<()> {
    terminal.draw(|frame| render_frame(frame, session))?;
    Ok(())
}

fn render_frame(frame: &mut Frame, session: &MatchSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(widgets::messages::MESSAGE_PANEL_HEIGHT + 2),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], session);
    widgets::board::render(frame, chunks[1], session.state(), session.machine());
    widgets::messages::render(frame, chunks[2], session.messages());
    widgets::footer::render(frame, chunks[3], session.machine());
}

fn render_header(frame: &mut Frame, area: ratatui::layout::Rect, session: &MatchSession) {
    let machine = session.machine();
    let action = machine
        .state()
        .target
        .map(|target| target.action.to_string())
        .unwrap_or_else(|| "-".to_string());
    let status = match session.outcome() {
        MatchOutcome::InProgress => "in progress",
        MatchOutcome::Victory => "victory",
    };

    let line = Line::from(vec![
        Span::raw(format!("Turn {} | ", session.turn())),
        Span::raw(format!("Mode: {} | ", machine.mode())),
        Span::raw(format!("Action: {action} | ")),
        Span::raw(format!("Cursor: {} | ", machine.cursor())),
        Span::raw(format!("Match: {status}")),
    ]);

    let header = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Tactics"));
    frame.render_widget(header, area);
}
