use super::{Anchor, Position, TileId};

/// Transient visual-state tag of a tile, consumed by the presentation layer.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TileState {
    #[default]
    None,
    /// Tile under the cursor.
    Selected,
    SelectedForMovement,
    SelectedForAttack,
}

impl TileState {
    pub fn is_highlighted(self) -> bool {
        !matches!(self, TileState::None)
    }
}

/// Addressable grid cell.
///
/// Identity, coordinate, and anchor are fixed at grid construction; only the
/// visual-state tag changes, and only through [`crate::Grid`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    id: TileId,
    position: Position,
    anchor: Anchor,
    state: TileState,
}

impl Tile {
    pub(crate) fn new(id: TileId, position: Position, anchor: Anchor) -> Self {
        Self {
            id,
            position,
            anchor,
            state: TileState::None,
        }
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Spawn/placement point for an entity standing here.
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn state(&self) -> TileState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: TileState) {
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn tile_state_names_are_snake_case() {
        assert_eq!(TileState::SelectedForMovement.to_string(), "selected_for_movement");
        assert_eq!(
            TileState::from_str("SELECTED_FOR_ATTACK").ok(),
            Some(TileState::SelectedForAttack)
        );
        assert!(!TileState::None.is_highlighted());
    }
}
