//! Action vocabulary shared by the turn-action facade and the input layer.

use crate::state::TileState;

/// Orthogonal step on the board. North is `+y`, East is `+x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    pub fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, 1),
            CardinalDirection::South => (0, -1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::West => (-1, 0),
        }
    }
}

/// Action committed together with a selected entity, resolved by the next
/// confirm.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PendingAction {
    #[default]
    Move,
    Attack,
}

impl PendingAction {
    /// The other action; used when the player switches what a selection does.
    pub fn toggled(self) -> Self {
        match self {
            PendingAction::Move => PendingAction::Attack,
            PendingAction::Attack => PendingAction::Move,
        }
    }

    /// Visual-state tag for tiles in this action's range.
    pub fn highlight_tag(self) -> TileState {
        match self {
            PendingAction::Move => TileState::SelectedForMovement,
            PendingAction::Attack => TileState::SelectedForAttack,
        }
    }
}
