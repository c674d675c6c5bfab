//! Per-turn input state machine.
//!
//! Two modes: `Selecting` (cursor roams) and `Selected` (a friendly entity is
//! committed and the next confirm resolves its action). Each event is handled
//! to completion, including highlight refresh, before the call returns.
//!
//! After a move is executed the presentation layer animates it; until it
//! calls [`SelectionStateMachine::motion_settled`], confirm and cancel are
//! answered with [`InputOutcome::Busy`] so the registry cannot run ahead of
//! the visuals. Cursor movement is always processed.

mod input;
mod state;

pub use input::{InputEvent, InputOutcome};
pub use state::{ControllerMode, SelectionState, SelectionTarget};

use crate::action::{CardinalDirection, PendingAction};
use crate::engine::TurnActionService;
use crate::error::{GridError, log_degraded};
use crate::event::MatchEvent;
use crate::state::{MatchState, Position, TileId, TileState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionStateMachine {
    state: SelectionState,
    /// Destinations of the committed action, fixed at commit time.
    legal_tiles: Vec<TileId>,
    awaiting_motion: bool,
}

impl SelectionStateMachine {
    pub fn new(origin: Position) -> Self {
        Self {
            state: SelectionState::new(origin),
            legal_tiles: Vec::new(),
            awaiting_motion: false,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn mode(&self) -> ControllerMode {
        self.state.mode
    }

    pub fn cursor(&self) -> Position {
        self.state.cursor
    }

    pub fn legal_tiles(&self) -> &[TileId] {
        &self.legal_tiles
    }

    pub fn is_awaiting_motion(&self) -> bool {
        self.awaiting_motion
    }

    /// Resets to `Selecting` at `origin` with no target and no highlights.
    ///
    /// An origin off the board is pulled onto the nearest edge tile so the
    /// cursor can always roam.
    pub fn begin_turn(&mut self, match_state: &mut MatchState, origin: Position) {
        let origin = if match_state.grid().id_at(origin).is_some() {
            origin
        } else {
            log_degraded(
                "SelectionStateMachine::begin_turn",
                &GridError::PositionNotFound(origin),
            );
            match_state.grid().nearest_position(origin).unwrap_or(origin)
        };

        TurnActionService::new(match_state).clear_highlights();
        self.state = SelectionState::new(origin);
        self.legal_tiles.clear();
        self.awaiting_motion = false;
        tracing::debug!("SelectionStateMachine::begin_turn - cursor at {}", origin);
    }

    /// Reported by the presentation layer once a move animation has finished.
    pub fn motion_settled(&mut self) {
        self.awaiting_motion = false;
    }

    pub fn handle(&mut self, match_state: &mut MatchState, input: InputEvent) -> InputOutcome {
        tracing::debug!(
            "SelectionStateMachine - {} while {}",
            input,
            self.state.mode
        );

        if let Some(direction) = input.direction() {
            return self.move_cursor(match_state, direction);
        }

        if self.awaiting_motion && matches!(input, InputEvent::Confirm | InputEvent::Cancel) {
            tracing::debug!("SelectionStateMachine - {} held until motion settles", input);
            return InputOutcome::Busy;
        }

        match (input, self.state.mode) {
            (InputEvent::Confirm, ControllerMode::Selecting) => self.select(match_state),
            (InputEvent::Confirm, ControllerMode::Selected) => self.execute(match_state),
            (InputEvent::Cancel, ControllerMode::Selected) => self.cancel(match_state),
            (InputEvent::SwitchAction, ControllerMode::Selected) => {
                self.switch_action(match_state)
            }
            _ => InputOutcome::Ignored,
        }
    }

    fn hovered_tile(&self, match_state: &MatchState) -> Option<TileId> {
        match_state.grid().id_at(self.state.cursor)
    }

    fn move_cursor(
        &mut self,
        match_state: &mut MatchState,
        direction: CardinalDirection,
    ) -> InputOutcome {
        let (dx, dy) = direction.delta();
        let Some(destination) = self.state.cursor.offset(dx, dy) else {
            return InputOutcome::Ignored;
        };
        let Some(tile) = match_state.grid().id_at(destination) else {
            return InputOutcome::Ignored;
        };

        self.state.cursor = destination;
        self.refresh_highlights(match_state);
        match_state.notify(MatchEvent::TileHovered {
            tile,
            position: destination,
        });

        InputOutcome::CursorMoved {
            tile,
            position: destination,
        }
    }

    fn refresh_highlights(&self, match_state: &mut MatchState) {
        let hovered = self.hovered_tile(match_state);
        let mut service = TurnActionService::new(match_state);
        service.clear_highlights();

        match self.state.target {
            Some(target) => service.tag_tiles(&self.legal_tiles, target.action.highlight_tag()),
            None => {
                if let Some(tile) = hovered {
                    service.tag_tiles(&[tile], TileState::Selected);
                }
            }
        }
    }

    fn select(&mut self, match_state: &mut MatchState) -> InputOutcome {
        let Some(tile) = self.hovered_tile(match_state) else {
            return InputOutcome::Ignored;
        };
        let mut service = TurnActionService::new(match_state);
        let Some(record) = service.record_for_tile(tile) else {
            return InputOutcome::Ignored;
        };
        if !record.is_player_controlled {
            tracing::debug!("SelectionStateMachine - {} is not friendly", record.entity);
            return InputOutcome::Ignored;
        }

        let action = PendingAction::Move;
        if service.available_tiles(record.entity, action).is_empty() {
            return InputOutcome::Ignored;
        }

        service.clear_highlights();
        self.legal_tiles = service.highlight(record.entity, action);
        service.notify(MatchEvent::EntitySelected {
            entity: record.entity,
            action,
        });
        self.state.commit(SelectionTarget {
            entity: record.entity,
            tile,
            action,
        });

        tracing::debug!(
            "SelectionStateMachine - {} selected with {} legal tiles",
            record.entity,
            self.legal_tiles.len()
        );
        InputOutcome::Selected {
            entity: record.entity,
            action,
        }
    }

    fn execute(&mut self, match_state: &mut MatchState) -> InputOutcome {
        let Some(target) = self.state.target else {
            return InputOutcome::Ignored;
        };
        let Some(tile) = self.hovered_tile(match_state) else {
            return InputOutcome::Ignored;
        };

        if !self.legal_tiles.contains(&tile) {
            return reject(match_state, GridError::IllegalDestination { tile });
        }

        let await_motion = match_state.config().await_motion;
        let mut service = TurnActionService::new(match_state);
        let result = match target.action {
            PendingAction::Move => service
                .try_move_entity(target.entity, tile)
                .map(|relocation| relocation.is_some()),
            PendingAction::Attack => service
                .try_declare_attack(target.entity, tile)
                .map(|_| false),
        };

        let moved = match result {
            Ok(moved) => moved,
            Err(error) => return reject(match_state, error),
        };

        service.clear_highlights();
        self.release();
        self.awaiting_motion = moved && await_motion;

        InputOutcome::Executed {
            entity: target.entity,
            action: target.action,
            tile,
        }
    }

    fn cancel(&mut self, match_state: &mut MatchState) -> InputOutcome {
        TurnActionService::new(match_state).clear_highlights();
        self.release();
        InputOutcome::Cancelled
    }

    fn switch_action(&mut self, match_state: &mut MatchState) -> InputOutcome {
        let Some(mut target) = self.state.target else {
            return InputOutcome::Ignored;
        };
        let action = target.action.toggled();
        let mut service = TurnActionService::new(match_state);
        if service.available_tiles(target.entity, action).is_empty() {
            return InputOutcome::Ignored;
        }

        service.clear_highlights();
        self.legal_tiles = service.highlight(target.entity, action);
        target.action = action;
        self.state.commit(target);

        InputOutcome::ActionSwitched { action }
    }

    fn release(&mut self) {
        self.state.release();
        self.legal_tiles.clear();
    }
}

fn reject(match_state: &mut MatchState, error: GridError) -> InputOutcome {
    log_degraded("SelectionStateMachine::confirm", &error);
    match_state.notify(MatchEvent::ActionRejected { error });
    InputOutcome::Rejected(error)
}
