use crate::action::{CardinalDirection, PendingAction};
use crate::error::GridError;
use crate::state::{EntityId, Position, TileId};

/// Zero-argument input signals from the input layer.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum InputEvent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Confirm,
    Cancel,
    /// Flip the pending action of a committed selection between move and attack.
    SwitchAction,
}

impl InputEvent {
    pub fn direction(self) -> Option<CardinalDirection> {
        match self {
            InputEvent::MoveUp => Some(CardinalDirection::North),
            InputEvent::MoveDown => Some(CardinalDirection::South),
            InputEvent::MoveLeft => Some(CardinalDirection::West),
            InputEvent::MoveRight => Some(CardinalDirection::East),
            _ => None,
        }
    }
}

/// What handling one input event did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// Nothing to do for this event in the current state.
    Ignored,
    /// A move animation has not settled; confirm and cancel are held off.
    Busy,
    CursorMoved { tile: TileId, position: Position },
    Selected { entity: EntityId, action: PendingAction },
    ActionSwitched { action: PendingAction },
    Executed {
        entity: EntityId,
        action: PendingAction,
        tile: TileId,
    },
    Rejected(GridError),
    Cancelled,
}
