//! Outbound notifications for the presentation layer.
//!
//! The core calls observers synchronously and ignores what they do; it never
//! needs to know their concrete type.

use crate::action::PendingAction;
use crate::error::GridError;
use crate::state::{EntityId, Position, TileId};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchEvent {
    /// The cursor now rests on `tile`.
    TileHovered { tile: TileId, position: Position },

    /// A confirm or placement was refused.
    ActionRejected { error: GridError },

    EntityAdded {
        entity: EntityId,
        tile: TileId,
        is_player_controlled: bool,
    },

    /// Start an animated traversal. `path` lists the tiles to visit after
    /// `from`, ending with `to`.
    EntityMoved {
        entity: EntityId,
        from: TileId,
        to: TileId,
        path: Vec<TileId>,
    },

    /// Snap the entity to its new tile without traversal.
    EntityTeleported {
        entity: EntityId,
        from: TileId,
        to: TileId,
    },

    EntityRemoved { entity: EntityId, tile: TileId },

    /// `attacker` struck the entity on `tile`; damage and defeat are resolved
    /// by the match controller.
    AttackDeclared {
        attacker: EntityId,
        target: EntityId,
        tile: TileId,
    },

    /// A selection was committed with the given pending action.
    EntitySelected {
        entity: EntityId,
        action: PendingAction,
    },
}

pub trait MatchObserver {
    fn on_event(&mut self, event: &MatchEvent);
}

/// Fan-out list of registered observers.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Box<dyn MatchObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: Box<dyn MatchObserver>) {
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn notify(&mut self, event: MatchEvent) {
        tracing::trace!("notify {:?}", event);
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    struct Recorder(Rc<RefCell<Vec<MatchEvent>>>);

    impl MatchObserver for Recorder {
        fn on_event(&mut self, event: &MatchEvent) {
            self.0.borrow_mut().push(event.clone());
        }
    }

    #[test]
    fn every_observer_sees_each_event() {
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ObserverRegistry::new();
        registry.register(Box::new(Recorder(first.clone())));
        registry.register(Box::new(Recorder(second.clone())));

        registry.notify(MatchEvent::EntityRemoved {
            entity: EntityId(1),
            tile: TileId(2),
        });

        assert_eq!(first.borrow().len(), 1);
        assert_eq!(*first.borrow(), *second.borrow());
    }
}
