//! Grid occupancy and turn-action core for a tactics game.
//!
//! `tactics-core` tracks which entity stands on which tile, arbitrates move
//! and teleport requests, computes range-limited tile sets for movement and
//! attack, and drives the per-turn selection state machine. All of it hangs
//! off an explicitly owned [`MatchState`]; presentation layers observe it
//! through [`MatchObserver`] and never the other way around.
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod selection;
pub mod state;

pub use action::{CardinalDirection, PendingAction};
pub use config::GameConfig;
pub use engine::TurnActionService;
pub use error::{ErrorSeverity, GameError, GridError};
pub use event::{MatchEvent, MatchObserver, ObserverRegistry};
pub use selection::{
    ControllerMode, InputEvent, InputOutcome, SelectionState, SelectionStateMachine,
    SelectionTarget,
};
pub use state::{
    Anchor, EntityId, Grid, GridDimensions, MatchState, OccupancyRecord, OccupancyRegistry,
    OccupationStatus, Position, Relocation, Tile, TileId, TileState,
};
