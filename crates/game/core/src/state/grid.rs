//! Rectangular tile grid and its range queries.

use crate::action::CardinalDirection;
use crate::error::{GridError, log_degraded};

use super::types::{Anchor, Position, Tile, TileId, TileState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
}

impl GridDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as i64) < self.width as i64
            && (position.y as i64) < self.height as i64
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Level board: tiles stored row-major, so `TileId(n)` is the n-th tile.
///
/// Coordinates are unique by construction and every in-bounds coordinate maps
/// to exactly one tile.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    dimensions: GridDimensions,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Builds a `width` x `height` board. Anchors are placed at the tile
    /// coordinate scaled by `tile_size`.
    pub fn new(dimensions: GridDimensions, tile_size: f32) -> Self {
        let mut tiles = Vec::with_capacity(dimensions.area());
        for y in 0..dimensions.height {
            for x in 0..dimensions.width {
                let id = TileId(tiles.len() as u32);
                let position = Position::new(x as i32, y as i32);
                let anchor = Anchor::new(x as f32 * tile_size, y as f32 * tile_size, 0.0);
                tiles.push(Tile::new(id, position, anchor));
            }
        }

        Self { dimensions, tiles }
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn contains(&self, id: TileId) -> bool {
        id.index() < self.tiles.len()
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    pub fn tile_at(&self, position: Position) -> Option<&Tile> {
        self.id_at(position).and_then(|id| self.tile(id))
    }

    pub fn id_at(&self, position: Position) -> Option<TileId> {
        if !self.dimensions.contains(position) {
            return None;
        }
        let index = position.y as usize * self.dimensions.width as usize + position.x as usize;
        Some(TileId(index as u32))
    }

    /// Closest on-board coordinate to `position`, clamping each axis. `None`
    /// only for an empty grid.
    pub fn nearest_position(&self, position: Position) -> Option<Position> {
        if self.tiles.is_empty() {
            return None;
        }
        let max_x = (self.dimensions.width - 1).min(i32::MAX as u32) as i32;
        let max_y = (self.dimensions.height - 1).min(i32::MAX as u32) as i32;
        Some(Position::new(
            position.x.clamp(0, max_x),
            position.y.clamp(0, max_y),
        ))
    }

    /// Tile one step away in `direction`, if it exists.
    pub fn neighbor(&self, id: TileId, direction: CardinalDirection) -> Option<TileId> {
        let origin = self.tile(id)?.position();
        let (dx, dy) = direction.delta();
        self.id_at(origin.offset(dx, dy)?)
    }

    /// Every tile within taxicab distance `range` of `origin`, origin included,
    /// in ascending [`TileId`] order.
    ///
    /// An origin that does not belong to the grid yields an empty set.
    pub fn tiles_within_range(&self, origin: TileId, range: u32) -> Vec<TileId> {
        let Some(center) = self.tile(origin).map(Tile::position) else {
            log_degraded("Grid::tiles_within_range", &GridError::InvalidTile(origin));
            return Vec::new();
        };

        let range = range.min(i32::MAX as u32) as i64;
        let width = self.dimensions.width as i64;
        let height = self.dimensions.height as i64;
        let (cx, cy) = (center.x as i64, center.y as i64);

        let mut tiles = Vec::new();
        for y in (cy - range).max(0)..=(cy + range).min(height - 1) {
            let reach = range - (y - cy).abs();
            for x in (cx - reach).max(0)..=(cx + reach).min(width - 1) {
                tiles.push(TileId((y * width + x) as u32));
            }
        }
        tiles
    }

    pub fn set_state(&mut self, id: TileId, state: TileState) -> Result<(), GridError> {
        let tile = self
            .tiles
            .get_mut(id.index())
            .ok_or(GridError::InvalidTile(id))?;
        tile.set_state(state);
        Ok(())
    }

    /// Resets every tile's visual-state tag to [`TileState::None`].
    pub fn clear_all_highlights(&mut self) {
        for tile in &mut self.tiles {
            tile.set_state(TileState::None);
        }
    }

    pub fn tiles_in_state(&self, state: TileState) -> Vec<TileId> {
        self.tiles
            .iter()
            .filter(|tile| tile.state() == state)
            .map(Tile::id)
            .collect()
    }
}
