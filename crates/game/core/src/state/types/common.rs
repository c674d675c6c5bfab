use std::fmt;

/// Opaque handle for an entity standing on the board.
///
/// Handles are issued by the match controller (or [`crate::MatchState::allocate_entity_id`])
/// and never interpreted by the core beyond equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Stable handle of a tile within one [`crate::Grid`].
///
/// The value is the row-major index of the tile; it stays valid for the
/// lifetime of the grid that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileId(pub u32);

impl TileId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Taxicab distance; movement is orthogonal and step-based.
    pub fn manhattan_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Shifted position, or `None` if a coordinate leaves the `i32` range.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// World-space placement point for an entity standing on a tile.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Anchor {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Position::new(2, 2);
        let b = Position::new(0, 4);
        assert_eq!(a.manhattan_distance(b), 4);
        assert_eq!(b.manhattan_distance(a), 4);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    #[test]
    fn offset_refuses_to_overflow() {
        assert_eq!(Position::new(1, 1).offset(-1, 2), Some(Position::new(0, 3)));
        assert_eq!(Position::new(i32::MAX, 0).offset(1, 0), None);
        assert_eq!(Position::new(0, i32::MIN).offset(0, -1), None);
    }
}
