use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use tactics_core::{
    EntityId, GameConfig, GridDimensions, MatchEvent, MatchObserver, MatchState, OccupancyRecord,
    Position, TileId, TurnActionService,
};

fn board(width: u32, height: u32) -> MatchState {
    MatchState::with_board(GridDimensions::new(width, height), GameConfig::default())
}

fn tile(state: &MatchState, x: i32, y: i32) -> TileId {
    state.grid().id_at(Position::new(x, y)).unwrap()
}

fn snapshot(state: &MatchState) -> Vec<OccupancyRecord> {
    state.occupancy().records().to_vec()
}

fn assert_single_occupancy(state: &MatchState) {
    let tiles: HashSet<_> = state.occupancy().iter().map(|record| record.tile).collect();
    let entities: HashSet<_> = state.occupancy().iter().map(|record| record.entity).collect();
    assert_eq!(tiles.len(), state.occupancy().len());
    assert_eq!(entities.len(), state.occupancy().len());
}

struct Recorder(Rc<RefCell<Vec<MatchEvent>>>);

impl MatchObserver for Recorder {
    fn on_event(&mut self, event: &MatchEvent) {
        self.0.borrow_mut().push(event.clone());
    }
}

#[test]
fn single_occupancy_holds_across_mixed_sequences() {
    let mut state = board(4, 4);
    let tiles = state.grid().len() as u32;

    // Small LCG so the sequence is deterministic.
    let mut seed: u32 = 0x2545_f491;
    let mut next = move |bound: u32| {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (seed >> 16) % bound
    };

    for _ in 0..500 {
        let entity = EntityId(next(6));
        let destination = TileId(next(tiles + 2));
        let mut service = TurnActionService::new(&mut state);
        match next(3) {
            0 => {
                service.add_entity(entity, destination, next(2) == 0);
            }
            1 => {
                service.move_entity(entity, destination);
            }
            _ => {
                service.teleport_entity(entity, destination);
            }
        }
        assert_single_occupancy(&state);
    }
}

#[test]
fn second_add_on_same_tile_keeps_the_first_record() {
    let mut state = board(3, 3);
    let center = tile(&state, 1, 1);
    let mut service = TurnActionService::new(&mut state);

    assert!(service.add_entity(EntityId(1), center, true));
    assert!(!service.add_entity(EntityId(2), center, false));

    let records = service.state().occupancy().records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].entity, EntityId(1));
    assert_eq!(service.record_for_tile(center).map(|r| r.entity), Some(EntityId(1)));
}

#[test]
fn invalid_moves_leave_registry_untouched() {
    let mut state = board(3, 3);
    let (a, b) = (tile(&state, 0, 0), tile(&state, 2, 2));
    {
        let mut service = TurnActionService::new(&mut state);
        service.add_entity(EntityId(1), a, true);
        service.add_entity(EntityId(2), b, false);
    }
    let before = snapshot(&state);

    let mut service = TurnActionService::new(&mut state);
    assert!(!service.move_entity(EntityId(99), a));
    assert!(!service.move_entity(EntityId(1), TileId(1_000)));
    assert!(!service.teleport_entity(EntityId(99), a));
    assert!(!service.teleport_entity(EntityId(1), TileId(1_000)));
    assert!(!service.add_entity(EntityId(3), a, false));
    assert!(!service.add_entity(EntityId(3), TileId(1_000), false));
    assert!(!service.move_entity(EntityId(1), b));

    assert_eq!(snapshot(&state), before);
}

#[test]
fn teleport_onto_current_tile_is_idempotent() {
    let mut state = board(3, 3);
    let start = tile(&state, 1, 0);
    let events = Rc::new(RefCell::new(Vec::new()));
    state.register_observer(Box::new(Recorder(events.clone())));

    let mut service = TurnActionService::new(&mut state);
    service.add_entity(EntityId(1), start, true);
    let before = snapshot(service.state());

    assert!(service.teleport_entity(EntityId(1), start));
    assert_eq!(snapshot(service.state()), before);
    assert!(
        !events
            .borrow()
            .iter()
            .any(|event| matches!(event, MatchEvent::EntityTeleported { .. }))
    );
}

#[test]
fn move_and_teleport_notify_the_presentation_layer() {
    let mut state = board(4, 4);
    let (a, b, c) = (tile(&state, 0, 0), tile(&state, 2, 1), tile(&state, 3, 3));
    let events = Rc::new(RefCell::new(Vec::new()));
    state.register_observer(Box::new(Recorder(events.clone())));

    let mut service = TurnActionService::new(&mut state);
    service.add_entity(EntityId(1), a, true);
    assert!(service.move_entity(EntityId(1), b));
    assert!(service.teleport_entity(EntityId(1), c));
    assert_eq!(service.tile_of(EntityId(1)), Some(c));

    let events = events.borrow();
    assert_eq!(
        events[1],
        MatchEvent::EntityMoved {
            entity: EntityId(1),
            from: a,
            to: b,
            path: vec![b],
        }
    );
    assert_eq!(
        events[2],
        MatchEvent::EntityTeleported {
            entity: EntityId(1),
            from: b,
            to: c,
        }
    );
}

#[test]
fn movement_range_from_center_of_five_by_five_is_the_taxicab_diamond() {
    let mut state = board(5, 5);
    let center = tile(&state, 2, 2);
    let neighbor = tile(&state, 1, 1);
    let corner = tile(&state, 0, 0);
    let mut service = TurnActionService::new(&mut state);
    service.add_entity(EntityId(1), center, true);
    service.add_entity(EntityId(2), neighbor, false);

    let tiles = service.available_movement_tiles(EntityId(1));
    let origin = Position::new(2, 2);
    let expected: Vec<_> = service
        .state()
        .grid()
        .tiles()
        .iter()
        .filter(|tile| tile.position().manhattan_distance(origin) <= 3)
        .map(|tile| tile.id())
        .collect();

    assert_eq!(tiles, expected);
    assert_eq!(tiles.len(), 21);
    // Occupancy does not filter the set.
    assert!(tiles.contains(&neighbor));
    assert!(!tiles.contains(&corner));
}

#[test]
fn find_any_enemy_returns_first_placed_enemy() {
    let mut state = board(4, 1);
    let tiles: Vec<_> = (0..4).map(|x| tile(&state, x, 0)).collect();
    let mut service = TurnActionService::new(&mut state);
    assert_eq!(service.find_any_enemy(), None);

    service.add_entity(EntityId(10), tiles[0], true);
    service.add_entity(EntityId(11), tiles[1], false);
    service.add_entity(EntityId(12), tiles[2], false);
    assert_eq!(service.find_any_enemy(), Some(EntityId(11)));

    assert!(service.remove_entity(EntityId(11)).is_some());
    assert_eq!(service.find_any_enemy(), Some(EntityId(12)));
    assert!(service.remove_entity(EntityId(11)).is_none());
    assert_eq!(service.entity_at(tiles[1]), None);
}

#[test]
fn unplaced_entity_yields_empty_ranges() {
    let mut state = board(3, 3);
    let mut service = TurnActionService::new(&mut state);
    assert!(service.available_movement_tiles(EntityId(5)).is_empty());
    assert!(service.highlight_for_movement(EntityId(5)).is_empty());
    assert!(
        service
            .state()
            .grid()
            .tiles()
            .iter()
            .all(|tile| !tile.state().is_highlighted())
    );
}
