//! Authoritative match state.
//!
//! [`MatchState`] owns the board, the occupancy registry, and the observers
//! for one match. It is held by a single owner (the match controller) and
//! lent to [`crate::TurnActionService`] and [`crate::SelectionStateMachine`]
//! for each call; nothing here is global.
pub mod grid;
pub mod occupancy;
pub mod types;

pub use grid::{Grid, GridDimensions};
pub use occupancy::{OccupancyRecord, OccupancyRegistry, OccupationStatus, Relocation};
pub use types::{Anchor, EntityId, Position, Tile, TileId, TileState};

use crate::config::GameConfig;
use crate::event::{MatchEvent, MatchObserver, ObserverRegistry};

#[derive(Debug)]
pub struct MatchState {
    grid: Grid,
    occupancy: OccupancyRegistry,
    observers: ObserverRegistry,
    config: GameConfig,

    /// Sequential entity ID allocator. Never reused within a match.
    next_entity_id: u32,
}

impl MatchState {
    pub fn new(grid: Grid, config: GameConfig) -> Self {
        Self {
            grid,
            occupancy: OccupancyRegistry::new(),
            observers: ObserverRegistry::new(),
            config,
            next_entity_id: 1,
        }
    }

    /// Builds an empty `width` x `height` board using the configured tile size.
    pub fn with_board(dimensions: GridDimensions, config: GameConfig) -> Self {
        let grid = Grid::new(dimensions, config.tile_size);
        Self::new(grid, config)
    }

    /// Swaps in the board for a new level.
    ///
    /// Records refer to tiles of the previous board, so all of them are dropped.
    pub fn setup_grid(&mut self, grid: Grid) {
        if !self.occupancy.is_empty() {
            tracing::info!(
                "MatchState::setup_grid - dropping {} records of the previous board",
                self.occupancy.len()
            );
        }
        self.occupancy.clear();
        self.grid = grid;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn occupancy(&self) -> &OccupancyRegistry {
        &self.occupancy
    }

    pub(crate) fn occupancy_mut(&mut self) -> &mut OccupancyRegistry {
        &mut self.occupancy
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn register_observer(&mut self, observer: Box<dyn MatchObserver>) {
        self.observers.register(observer);
    }

    pub(crate) fn notify(&mut self, event: MatchEvent) {
        self.observers.notify(event);
    }

    /// Allocates a fresh entity handle, or `None` once the id space is spent.
    pub fn allocate_entity_id(&mut self) -> Option<EntityId> {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id = self.next_entity_id.checked_add(1)?;
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocated_ids_are_unique() {
        let mut state = MatchState::with_board(GridDimensions::new(2, 2), GameConfig::default());
        let first = state.allocate_entity_id().unwrap();
        let second = state.allocate_entity_id().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn setup_grid_drops_stale_records() {
        let mut state = MatchState::with_board(GridDimensions::new(3, 3), GameConfig::default());
        state
            .occupancy_mut()
            .add(EntityId(1), TileId(4), true)
            .unwrap();

        state.setup_grid(Grid::new(GridDimensions::new(2, 2), 1.0));
        assert!(state.occupancy().is_empty());
        assert_eq!(state.grid().len(), 4);
    }
}
