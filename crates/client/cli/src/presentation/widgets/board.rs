//! Board widget: one cell per tile, colored by tile state and occupant.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tactics_core::{
    ControllerMode, MatchState, OccupationStatus, Position, SelectionStateMachine, TileState,
};

/// Render the board with north at the top.
pub fn render(frame: &mut Frame, area: Rect, state: &MatchState, machine: &SelectionStateMachine) {
    let dimensions = state.grid().dimensions();
    let cursor = machine.cursor();
    // The hovered tile is already tagged while selecting.
    let mark_cursor = machine.mode() == ControllerMode::Selected;

    let rows: Vec<Line> = (0..dimensions.height as i32)
        .rev()
        .map(|y| {
            let spans: Vec<Span> = (0..dimensions.width as i32)
                .filter_map(|x| state.grid().tile_at(Position::new(x, y)))
                .map(|tile| {
                    let occupant = state.occupancy().status(tile.id());
                    let is_cursor = mark_cursor && tile.position() == cursor;
                    let (glyph, style) = cell(tile.state(), occupant, is_cursor);
                    Span::styled(glyph, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(rows).block(Block::default().borders(Borders::ALL).title("Board"));
    frame.render_widget(board, area);
}

/// Glyph and style for a single tile.
pub fn cell(state: TileState, occupant: OccupationStatus, is_cursor: bool) -> (&'static str, Style) {
    let (glyph, foreground) = match occupant {
        OccupationStatus::Empty => (" . ", Color::DarkGray),
        OccupationStatus::PlayerOccupied => (" @ ", Color::Green),
        OccupationStatus::EnemyOccupied => (" E ", Color::Red),
    };

    let mut style = Style::default().fg(foreground);
    style = match state {
        TileState::None => style,
        TileState::Selected => style.bg(Color::Gray).fg(Color::Black),
        TileState::SelectedForMovement => style.bg(Color::Blue),
        TileState::SelectedForAttack => style.bg(Color::LightRed).fg(Color::Black),
    };

    if occupant.is_occupied() {
        style = style.add_modifier(Modifier::BOLD);
    }
    if is_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    (glyph, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_follows_occupant() {
        assert_eq!(cell(TileState::None, OccupationStatus::Empty, false).0, " . ");
        assert_eq!(cell(TileState::None, OccupationStatus::PlayerOccupied, false).0, " @ ");
        assert_eq!(cell(TileState::None, OccupationStatus::EnemyOccupied, false).0, " E ");
    }

    #[test]
    fn background_follows_tile_state() {
        let (_, plain) = cell(TileState::None, OccupationStatus::Empty, false);
        let (_, movement) = cell(TileState::SelectedForMovement, OccupationStatus::Empty, false);
        let (_, attack) = cell(TileState::SelectedForAttack, OccupationStatus::EnemyOccupied, false);

        assert_eq!(plain.bg, None);
        assert_eq!(movement.bg, Some(Color::Blue));
        assert_eq!(attack.bg, Some(Color::LightRed));
        assert!(attack.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn cursor_is_reversed() {
        let (_, style) = cell(TileState::SelectedForMovement, OccupationStatus::Empty, true);
        assert!(style.add_modifier.contains(Modifier::REVERSED));
    }
}
