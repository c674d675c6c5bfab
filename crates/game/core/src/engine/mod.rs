//! Turn-action facade over the board and the occupancy registry.
//!
//! [`TurnActionService`] is what gameplay code talks to: it places and moves
//! entities, answers occupancy questions, and computes the tile sets that get
//! highlighted for movement and attack. Every public operation is total: a bad
//! handle or a refused placement is logged and turns into `false`, `None`, or
//! an empty set, never a panic.

use crate::action::PendingAction;
use crate::error::{GridError, log_degraded};
use crate::event::MatchEvent;
use crate::state::{
    EntityId, Grid, MatchState, OccupancyRecord, OccupationStatus, Relocation, TileId, TileState,
};

/// Borrowing facade; create one per call site, like the match controller's
/// handle on the state it owns.
pub struct TurnActionService<'a> {
    state: &'a mut MatchState,
}

impl<'a> TurnActionService<'a> {
    pub fn new(state: &'a mut MatchState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &MatchState {
        &*self.state
    }

    pub fn setup_grid(&mut self, grid: Grid) {
        self.state.setup_grid(grid);
    }

    // ===== placement =====

    /// Places an already-constructed entity. Returns whether it was placed.
    pub fn add_entity(&mut self, entity: EntityId, tile: TileId, is_player_controlled: bool) -> bool {
        match self.try_add_entity(entity, tile, is_player_controlled) {
            Ok(()) => true,
            Err(error) => {
                log_degraded("TurnActionService::add_entity", &error);
                false
            }
        }
    }

    /// Allocates a handle and places a new entity on `tile`.
    pub fn spawn_entity(&mut self, tile: TileId, is_player_controlled: bool) -> Option<EntityId> {
        if let Some(record) = self.state.occupancy().record_for_tile(tile) {
            let error = GridError::AlreadyOccupied {
                tile,
                occupant: record.entity,
            };
            log_degraded("TurnActionService::spawn_entity", &error);
            return None;
        }

        let Some(entity) = self.state.allocate_entity_id() else {
            tracing::error!("TurnActionService::spawn_entity - entity ids exhausted");
            return None;
        };
        self.add_entity(entity, tile, is_player_controlled)
            .then_some(entity)
    }

    fn try_add_entity(
        &mut self,
        entity: EntityId,
        tile: TileId,
        is_player_controlled: bool,
    ) -> Result<(), GridError> {
        self.ensure_tile(tile)?;
        self.state
            .occupancy_mut()
            .add(entity, tile, is_player_controlled)?;
        self.state.notify(MatchEvent::EntityAdded {
            entity,
            tile,
            is_player_controlled,
        });
        Ok(())
    }

    /// Takes a defeated or despawned entity off the board.
    pub fn remove_entity(&mut self, entity: EntityId) -> Option<OccupancyRecord> {
        match self.state.occupancy_mut().remove(entity) {
            Ok(record) => {
                tracing::info!("{} removed from {}", entity, record.tile);
                self.state.notify(MatchEvent::EntityRemoved {
                    entity,
                    tile: record.tile,
                });
                Some(record)
            }
            Err(error) => {
                log_degraded("TurnActionService::remove_entity", &error);
                None
            }
        }
    }

    // ===== relocation =====

    /// Walks `entity` to `destination` with an animated traversal.
    ///
    /// Range is not checked; that belongs to whoever picked the destination.
    /// Returns whether the entity now stands on `destination`.
    pub fn move_entity(&mut self, entity: EntityId, destination: TileId) -> bool {
        match self.try_move_entity(entity, destination) {
            Ok(_) => true,
            Err(error) => {
                log_degraded("TurnActionService::move_entity", &error);
                false
            }
        }
    }

    pub(crate) fn try_move_entity(
        &mut self,
        entity: EntityId,
        destination: TileId,
    ) -> Result<Option<Relocation>, GridError> {
        self.ensure_tile(destination)?;
        let relocation = self
            .state
            .occupancy_mut()
            .move_entity(entity, destination)?;

        if let Some(Relocation { entity, from, to }) = relocation {
            tracing::info!("{} moving {} -> {}", entity, from, to);
            self.state.notify(MatchEvent::EntityMoved {
                entity,
                from,
                to,
                // No pathfinding: the traversal goes straight to the destination.
                path: vec![to],
            });
        }
        Ok(relocation)
    }

    /// Relocates `entity` immediately. Teleporting onto the current tile does
    /// nothing.
    pub fn teleport_entity(&mut self, entity: EntityId, destination: TileId) -> bool {
        match self.try_teleport_entity(entity, destination) {
            Ok(_) => true,
            Err(error) => {
                log_degraded("TurnActionService::teleport_entity", &error);
                false
            }
        }
    }

    pub(crate) fn try_teleport_entity(
        &mut self,
        entity: EntityId,
        destination: TileId,
    ) -> Result<Option<Relocation>, GridError> {
        self.ensure_tile(destination)?;
        let relocation = self.state.occupancy_mut().teleport(entity, destination)?;

        if let Some(Relocation { entity, from, to }) = relocation {
            tracing::info!("{} teleported {} -> {}", entity, from, to);
            self.state
                .notify(MatchEvent::EntityTeleported { entity, from, to });
        }
        Ok(relocation)
    }

    // ===== attack =====

    /// Declares an attack by `attacker` on whoever stands on `tile`.
    ///
    /// The tile must lie in the attacker's attack range and hold an entity of
    /// the opposing side. Returns the struck entity.
    pub fn declare_attack(&mut self, attacker: EntityId, tile: TileId) -> Option<EntityId> {
        match self.try_declare_attack(attacker, tile) {
            Ok(target) => Some(target),
            Err(error) => {
                log_degraded("TurnActionService::declare_attack", &error);
                None
            }
        }
    }

    pub(crate) fn try_declare_attack(
        &mut self,
        attacker: EntityId,
        tile: TileId,
    ) -> Result<EntityId, GridError> {
        self.ensure_tile(tile)?;
        let attacker_record = *self
            .state
            .occupancy()
            .record_for_entity(attacker)
            .ok_or(GridError::EntityNotFound(attacker))?;

        let in_range = self
            .state
            .grid()
            .tiles_within_range(attacker_record.tile, self.state.config().attack_range)
            .contains(&tile);
        let target = self
            .state
            .occupancy()
            .record_for_tile(tile)
            .filter(|record| record.is_player_controlled != attacker_record.is_player_controlled)
            .map(|record| record.entity);

        match target {
            Some(target) if in_range => {
                tracing::info!("{} attacks {} on {}", attacker, target, tile);
                self.state.notify(MatchEvent::AttackDeclared {
                    attacker,
                    target,
                    tile,
                });
                Ok(target)
            }
            _ => Err(GridError::IllegalDestination { tile }),
        }
    }

    // ===== queries =====

    pub fn occupation_status(&self, tile: TileId) -> OccupationStatus {
        if let Err(error) = self.ensure_tile(tile) {
            log_degraded("TurnActionService::occupation_status", &error);
            return OccupationStatus::Empty;
        }
        self.state.occupancy().status(tile)
    }

    pub fn record_for_tile(&self, tile: TileId) -> Option<OccupancyRecord> {
        self.state.occupancy().record_for_tile(tile).copied()
    }

    pub fn record_for_entity(&self, entity: EntityId) -> Option<OccupancyRecord> {
        self.state.occupancy().record_for_entity(entity).copied()
    }

    pub fn entity_at(&self, tile: TileId) -> Option<EntityId> {
        self.record_for_tile(tile).map(|record| record.entity)
    }

    pub fn tile_of(&self, entity: EntityId) -> Option<TileId> {
        self.record_for_entity(entity).map(|record| record.tile)
    }

    /// First enemy in placement order. The order is not a targeting priority.
    pub fn find_any_enemy(&self) -> Option<EntityId> {
        self.state
            .occupancy()
            .first_enemy()
            .map(|record| record.entity)
    }

    pub fn available_movement_tiles(&self, entity: EntityId) -> Vec<TileId> {
        self.available_tiles(entity, PendingAction::Move)
    }

    pub fn available_attack_tiles(&self, entity: EntityId) -> Vec<TileId> {
        self.available_tiles(entity, PendingAction::Attack)
    }

    /// Tiles reachable by `action` from the tile `entity` stands on.
    /// Occupancy does not filter the set.
    pub fn available_tiles(&self, entity: EntityId, action: PendingAction) -> Vec<TileId> {
        let Some(origin) = self.tile_of(entity) else {
            log_degraded(
                "TurnActionService::available_tiles",
                &GridError::EntityNotFound(entity),
            );
            return Vec::new();
        };
        let config = self.state.config();
        let range = match action {
            PendingAction::Move => config.movement_range,
            PendingAction::Attack => config.attack_range,
        };
        self.state.grid().tiles_within_range(origin, range)
    }

    // ===== highlighting =====

    pub fn highlight_for_movement(&mut self, entity: EntityId) -> Vec<TileId> {
        self.highlight(entity, PendingAction::Move)
    }

    pub fn highlight_for_attack(&mut self, entity: EntityId) -> Vec<TileId> {
        self.highlight(entity, PendingAction::Attack)
    }

    /// Tags every tile of `entity`'s range for `action` and returns the set.
    /// Previous tags are left alone; clear first for a fresh view.
    pub fn highlight(&mut self, entity: EntityId, action: PendingAction) -> Vec<TileId> {
        let tiles = self.available_tiles(entity, action);
        self.tag_tiles(&tiles, action.highlight_tag());
        tiles
    }

    pub(crate) fn tag_tiles(&mut self, tiles: &[TileId], tag: TileState) {
        let grid = self.state.grid_mut();
        for &tile in tiles {
            if let Err(error) = grid.set_state(tile, tag) {
                log_degraded("TurnActionService::tag_tiles", &error);
            }
        }
    }

    pub fn clear_highlights(&mut self) {
        self.state.grid_mut().clear_all_highlights();
    }

    pub(crate) fn notify(&mut self, event: MatchEvent) {
        self.state.notify(event);
    }

    fn ensure_tile(&self, tile: TileId) -> Result<(), GridError> {
        if self.state.grid().contains(tile) {
            Ok(())
        } else {
            Err(GridError::InvalidTile(tile))
        }
    }
}
