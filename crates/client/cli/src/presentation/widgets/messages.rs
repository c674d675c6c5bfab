//! Messages widget displaying recent match events.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::app::{MessageEntry, MessageLevel, MessageLog};

/// Height of message panel in lines.
pub const MESSAGE_PANEL_HEIGHT: u16 = 5;

/// Render the message log panel, newest at the bottom.
pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog) {
    let mut items: Vec<ListItem> = messages
        .recent(MESSAGE_PANEL_HEIGHT as usize)
        .map(|entry| ListItem::new(format_message(entry)).style(style_for(entry.level)))
        .collect();

    // Pad with empty lines to maintain consistent height
    while items.len() < MESSAGE_PANEL_HEIGHT as usize {
        items.push(ListItem::new(""));
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

fn format_message(entry: &MessageEntry) -> String {
    format!("[T{}] {}", entry.turn, entry.text)
}

fn style_for(level: MessageLevel) -> Style {
    match level {
        MessageLevel::Info => Style::default(),
        MessageLevel::Success => Style::default().fg(Color::Green),
        MessageLevel::Warning => Style::default().fg(Color::Yellow),
    }
}
