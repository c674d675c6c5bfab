//! Match controller: owns the match state, feeds it input signals, and turns
//! observer notifications into log lines and follow-up actions.
use std::cell::RefCell;
use std::rc::Rc;

use tactics_core::{
    EntityId, GridDimensions, InputEvent, InputOutcome, MatchEvent, MatchObserver, MatchState,
    Position, SelectionStateMachine, TileId, TurnActionService,
};

use super::message::{MessageLevel, MessageLog};
use crate::config::{BoardConfig, CliConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    InProgress,
    Victory,
}

/// Collects notifications for the controller to process after each call into
/// the core.
#[derive(Clone, Default)]
struct EventInbox(Rc<RefCell<Vec<MatchEvent>>>);

impl EventInbox {
    fn take(&self) -> Vec<MatchEvent> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

impl MatchObserver for EventInbox {
    fn on_event(&mut self, event: &MatchEvent) {
        self.0.borrow_mut().push(event.clone());
    }
}

pub struct MatchSession {
    state: MatchState,
    machine: SelectionStateMachine,
    inbox: EventInbox,
    messages: MessageLog,
    turn: u32,
    outcome: MatchOutcome,
}

impl MatchSession {
    pub fn new(config: &CliConfig) -> Self {
        let dimensions = GridDimensions::new(config.board.width, config.board.height);
        let mut state = MatchState::with_board(dimensions, config.game.clone());
        let inbox = EventInbox::default();
        state.register_observer(Box::new(inbox.clone()));

        let origin = populate(&mut state, &config.board);
        let mut machine = SelectionStateMachine::new(origin);
        machine.begin_turn(&mut state, origin);

        let mut session = Self {
            state,
            machine,
            inbox,
            messages: MessageLog::new(config.messages.capacity),
            turn: 1,
            outcome: MatchOutcome::InProgress,
        };
        session.drain_events();
        session.check_victory();
        session
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn machine(&self) -> &SelectionStateMachine {
        &self.machine
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn outcome(&self) -> MatchOutcome {
        self.outcome
    }

    /// Feeds one signal to the selection state machine and processes whatever
    /// the core emitted in response.
    pub fn apply(&mut self, input: InputEvent) -> InputOutcome {
        let outcome = self.machine.handle(&mut self.state, input);

        match &outcome {
            InputOutcome::Busy => {
                self.push(MessageLevel::Info, "Waiting for the move to finish");
            }
            InputOutcome::Cancelled => self.push(MessageLevel::Info, "Selection cancelled"),
            InputOutcome::ActionSwitched { action } => {
                self.push(MessageLevel::Info, format!("Pending action: {action}"));
            }
            _ => {}
        }

        self.drain_events();

        if let InputOutcome::Executed { .. } = outcome {
            self.turn = self.turn.saturating_add(1);
            self.check_victory();
        }

        outcome
    }

    /// The terminal draws moves in a single frame, so a rendered frame means
    /// the traversal is done.
    pub fn settle_motion(&mut self) {
        if self.machine.is_awaiting_motion() {
            self.machine.motion_settled();
            tracing::debug!("Motion settled on turn {}", self.turn);
        }
    }

    fn drain_events(&mut self) {
        loop {
            let events = self.inbox.take();
            if events.is_empty() {
                break;
            }
            for event in events {
                self.on_match_event(event);
            }
        }
    }

    fn on_match_event(&mut self, event: MatchEvent) {
        match event {
            MatchEvent::TileHovered { .. } => {}
            MatchEvent::ActionRejected { error } => {
                self.push(MessageLevel::Warning, format!("Refused: {error}"));
            }
            MatchEvent::EntityAdded {
                entity,
                tile,
                is_player_controlled,
            } => {
                let side = if is_player_controlled { "Ally" } else { "Enemy" };
                let text = format!("{side} {entity} enters at {}", self.describe(tile));
                self.push(MessageLevel::Info, text);
            }
            MatchEvent::EntitySelected { entity, action } => {
                self.push(MessageLevel::Info, format!("{entity} selected ({action})"));
            }
            MatchEvent::EntityMoved { entity, to, path, .. } => {
                let text = format!(
                    "{entity} moves to {} ({} step(s))",
                    self.describe(to),
                    path.len()
                );
                self.push(MessageLevel::Info, text);
            }
            MatchEvent::EntityTeleported { entity, to, .. } => {
                let text = format!("{entity} blinks to {}", self.describe(to));
                self.push(MessageLevel::Info, text);
            }
            MatchEvent::AttackDeclared {
                attacker, target, ..
            } => {
                self.push(MessageLevel::Info, format!("{attacker} strikes {target}"));
                // Every hit is lethal in this client.
                TurnActionService::new(&mut self.state).remove_entity(target);
            }
            MatchEvent::EntityRemoved { entity, .. } => {
                self.push(MessageLevel::Success, format!("{entity} is defeated"));
            }
        }
    }

    fn check_victory(&mut self) {
        if self.outcome == MatchOutcome::Victory {
            return;
        }
        if TurnActionService::new(&mut self.state)
            .find_any_enemy()
            .is_none()
        {
            self.outcome = MatchOutcome::Victory;
            tracing::info!("No enemies left after turn {}", self.turn);
            self.push(MessageLevel::Success, "Victory! No enemies remain");
        }
    }

    fn describe(&self, tile: TileId) -> String {
        self.state
            .grid()
            .tile(tile)
            .map(|tile| tile.position().to_string())
            .unwrap_or_else(|| tile.to_string())
    }

    fn push(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.messages.push(self.turn, level, text);
    }
}

/// Places the player squad on the bottom row and enemies from the top row
/// down. Returns where the cursor should start.
fn populate(state: &mut MatchState, board: &BoardConfig) -> Position {
    let (width, height) = (board.width as i32, board.height as i32);
    let leader = Position::new(width / 2, 0);
    let squad = [leader, Position::new(width / 2 - 2, 0)];

    let mut service = TurnActionService::new(state);
    let mut allies: Vec<EntityId> = Vec::new();
    for position in squad {
        let Some(tile) = service.state().grid().id_at(position) else {
            continue;
        };
        if service.entity_at(tile).is_none() {
            allies.extend(service.spawn_entity(tile, true));
        }
    }

    let mut placed = 0;
    let lowest_enemy_row = if height > 1 { 1 } else { 0 };
    'rows: for y in (lowest_enemy_row..height).rev() {
        for x in (((height - 1 - y) % 2)..width).step_by(2) {
            if placed >= board.enemy_count {
                break 'rows;
            }
            let Some(tile) = service.state().grid().id_at(Position::new(x, y)) else {
                continue;
            };
            if service.entity_at(tile).is_none() && service.spawn_entity(tile, false).is_some() {
                placed += 1;
            }
        }
    }

    tracing::info!(
        "Match populated: {} allies, {} enemies on {}x{}",
        allies.len(),
        placed,
        width,
        height
    );
    leader
}
