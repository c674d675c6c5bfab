//! Occupancy bookkeeping: which entity stands on which tile.
//!
//! The registry is the only place single occupancy is enforced. It knows
//! nothing about grid geometry, ranges, or reachability; callers validate
//! tiles against the grid and destinations against the rules before asking
//! it to relocate anyone.

use crate::error::GridError;

use super::types::{EntityId, TileId};

/// Binds one entity to the one tile it currently occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyRecord {
    pub entity: EntityId,
    pub tile: TileId,
    pub is_player_controlled: bool,
}

/// Who, if anyone, holds a tile.
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
pub enum OccupationStatus {
    #[default]
    Empty,
    PlayerOccupied,
    EnemyOccupied,
}

impl OccupationStatus {
    pub fn is_occupied(self) -> bool {
        !matches!(self, OccupationStatus::Empty)
    }
}

/// Record of a committed tile change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relocation {
    pub entity: EntityId,
    pub from: TileId,
    pub to: TileId,
}

/// Insertion-ordered set of occupancy records.
///
/// Lookups are linear; boards hold a handful of entities.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyRegistry {
    records: Vec<OccupancyRecord>,
}

impl OccupancyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[OccupancyRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &OccupancyRecord> + '_ {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record_for_tile(&self, tile: TileId) -> Option<&OccupancyRecord> {
        self.records.iter().find(|record| record.tile == tile)
    }

    pub fn record_for_entity(&self, entity: EntityId) -> Option<&OccupancyRecord> {
        self.records.iter().find(|record| record.entity == entity)
    }

    fn record_for_entity_mut(&mut self, entity: EntityId) -> Option<&mut OccupancyRecord> {
        self.records.iter_mut().find(|record| record.entity == entity)
    }

    pub fn status(&self, tile: TileId) -> OccupationStatus {
        match self.record_for_tile(tile) {
            None => OccupationStatus::Empty,
            Some(record) if record.is_player_controlled => OccupationStatus::PlayerOccupied,
            Some(_) => OccupationStatus::EnemyOccupied,
        }
    }

    /// Places `entity` on `tile`.
    ///
    /// Rejected without mutation if the tile is taken or the entity already
    /// has a record.
    pub fn add(
        &mut self,
        entity: EntityId,
        tile: TileId,
        is_player_controlled: bool,
    ) -> Result<(), GridError> {
        if let Some(record) = self.record_for_tile(tile) {
            return Err(GridError::AlreadyOccupied {
                tile,
                occupant: record.entity,
            });
        }
        if self.record_for_entity(entity).is_some() {
            return Err(GridError::DuplicateEntity(entity));
        }

        self.records.push(OccupancyRecord {
            entity,
            tile,
            is_player_controlled,
        });
        tracing::debug!("OccupancyRegistry::add - {} placed on {}", entity, tile);
        Ok(())
    }

    /// Moves the record of `entity` onto `destination`.
    ///
    /// Range and reachability are not checked here. Returns `Ok(None)` when
    /// the entity already stands on `destination`.
    pub fn move_entity(
        &mut self,
        entity: EntityId,
        destination: TileId,
    ) -> Result<Option<Relocation>, GridError> {
        self.relocate(entity, destination)
    }

    /// Relocates `entity` immediately. Teleporting onto the current tile is
    /// a no-op.
    pub fn teleport(
        &mut self,
        entity: EntityId,
        destination: TileId,
    ) -> Result<Option<Relocation>, GridError> {
        self.relocate(entity, destination)
    }

    fn relocate(
        &mut self,
        entity: EntityId,
        destination: TileId,
    ) -> Result<Option<Relocation>, GridError> {
        let origin = self
            .record_for_entity(entity)
            .map(|record| record.tile)
            .ok_or(GridError::EntityNotFound(entity))?;

        if origin == destination {
            return Ok(None);
        }

        if let Some(record) = self.record_for_tile(destination) {
            return Err(GridError::AlreadyOccupied {
                tile: destination,
                occupant: record.entity,
            });
        }

        let record = self
            .record_for_entity_mut(entity)
            .ok_or(GridError::EntityNotFound(entity))?;
        record.tile = destination;

        Ok(Some(Relocation {
            entity,
            from: origin,
            to: destination,
        }))
    }

    /// Deletes the record of `entity`, preserving the order of the rest.
    pub fn remove(&mut self, entity: EntityId) -> Result<OccupancyRecord, GridError> {
        let index = self
            .records
            .iter()
            .position(|record| record.entity == entity)
            .ok_or(GridError::EntityNotFound(entity))?;
        Ok(self.records.remove(index))
    }

    /// First non-player record in insertion order.
    pub fn first_enemy(&self) -> Option<&OccupancyRecord> {
        self.records.iter().find(|record| !record.is_player_controlled)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
