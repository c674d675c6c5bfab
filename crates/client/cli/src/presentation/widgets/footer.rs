//! Footer widget displaying context-sensitive key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tactics_core::{ControllerMode, SelectionStateMachine};

pub fn render(frame: &mut Frame, area: Rect, machine: &SelectionStateMachine) {
    let spans = match machine.mode() {
        ControllerMode::Selecting => vec![
            Span::raw("[hjkl/WASD/Arrows] Move cursor | "),
            Span::raw("[Enter/Space] Select unit | "),
            Span::raw("[q] Quit"),
        ],
        ControllerMode::Selected => vec![
            Span::raw("[hjkl/WASD/Arrows] Move cursor | "),
            Span::raw("[Enter/Space] Execute | "),
            Span::raw("[Tab] Move/Attack | "),
            Span::raw("[Esc] Cancel | "),
            Span::raw("[q] Quit"),
        ],
    };

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
