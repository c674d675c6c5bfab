use crate::action::PendingAction;
use crate::state::{EntityId, Position, TileId};

/// Input mode of a player turn.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ControllerMode {
    /// Cursor roams; nothing is committed.
    #[default]
    Selecting,
    /// A friendly entity is committed and the next confirm picks its destination.
    Selected,
}

/// Entity committed while in [`ControllerMode::Selected`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionTarget {
    pub entity: EntityId,
    /// Tile the entity stood on when it was committed.
    pub tile: TileId,
    pub action: PendingAction,
}

/// Cursor and mode of the turn being played.
///
/// `target` is `Some` exactly when `mode` is [`ControllerMode::Selected`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionState {
    pub cursor: Position,
    pub mode: ControllerMode,
    pub target: Option<SelectionTarget>,
}

impl SelectionState {
    pub fn new(cursor: Position) -> Self {
        Self {
            cursor,
            mode: ControllerMode::Selecting,
            target: None,
        }
    }

    pub(crate) fn commit(&mut self, target: SelectionTarget) {
        self.mode = ControllerMode::Selected;
        self.target = Some(target);
    }

    pub(crate) fn release(&mut self) {
        self.mode = ControllerMode::Selecting;
        self.target = None;
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(Position::ORIGIN)
    }
}
