use crate::tests::appointment;
use crate::{BoardState, BoardStore, MoveOutcome, MoveTarget};

use uuid::Uuid;

use sm_core::AppointmentStatus::{InProgress, Ready, Scheduled};

// =============================================================
// BoardState
// =============================================================

#[test]
fn state_orders_lanes_by_server_position_and_reindexes() {
    let a = appointment("A", Scheduled, 5);
    let b = appointment("B", Scheduled, 2);
    let state = BoardState::from_appointments(&[a.clone(), b.clone()]);

    assert_eq!(state.lane(Scheduled), &[b.id, a.id]);
    assert_eq!(state.card(b.id).unwrap().position, 0);
    assert_eq!(state.card(a.id).unwrap().position, 1);
}

#[test]
fn state_position_ties_keep_payload_order() {
    let a = appointment("A", Scheduled, 1);
    let b = appointment("B", Scheduled, 1);
    let state = BoardState::from_appointments(&[a.clone(), b.clone()]);

    assert_eq!(state.lane(Scheduled), &[a.id, b.id]);
}

#[test]
fn state_apply_move_clamps_index() {
    let a = appointment("A", Scheduled, 0);
    let mut state = BoardState::from_appointments(&[a.clone()]);

    state.apply_move(a.id, InProgress, 99).unwrap();

    assert_eq!(state.placement(a.id), Some((InProgress, 0)));
    assert!(state.lane(Scheduled).is_empty());
}

#[test]
fn state_columns_aggregate_count_and_sum() {
    let a = appointment("A", Scheduled, 0);
    let b = appointment("B", Scheduled, 1);
    let c = appointment("C", Ready, 0);
    let state = BoardState::from_appointments(&[a, b, c]);

    let columns = state.columns();
    let scheduled = columns.iter().find(|c| c.status == Scheduled).unwrap();
    let ready = columns.iter().find(|c| c.status == Ready).unwrap();

    assert_eq!(scheduled.count, 2);
    assert_eq!(scheduled.sum_cents, 9998);
    assert_eq!(scheduled.title, "Scheduled");
    assert_eq!(ready.count, 1);
    assert_eq!(ready.sum_cents, 4999);
}

#[test]
fn state_reconcile_matching_values_leaves_ordering_untouched() {
    let a = appointment("A", Scheduled, 0);
    let b = appointment("B", Scheduled, 1);
    let mut state = BoardState::from_appointments(&[a.clone(), b.clone()]);
    let before = state.clone();

    // Server echoes exactly what we already have, with a version bump
    let mut echoed = a.clone();
    echoed.version = 2;
    state.reconcile(&echoed);

    assert_eq!(state.lane(Scheduled), before.lane(Scheduled));
    assert_eq!(state.card(a.id).unwrap().version, 2);
}

#[test]
fn state_reconcile_follows_server_reorder() {
    let a = appointment("A", Scheduled, 0);
    let b = appointment("B", Scheduled, 1);
    let mut state = BoardState::from_appointments(&[a.clone(), b.clone()]);

    // Server says A actually sits after B
    let mut moved = a.clone();
    moved.position = 1;
    moved.version = 2;
    state.reconcile(&moved);

    assert_eq!(state.lane(Scheduled), &[b.id, a.id]);
    assert_eq!(state.card(a.id).unwrap().position, 1);
}

// =============================================================
// BoardStore: optimistic move + snapshot/rollback
// =============================================================

fn store_with_view(appointments: &[sm_core::Appointment]) -> BoardStore {
    let mut store = BoardStore::new();
    store.insert_view("board", BoardState::from_appointments(appointments));
    store
}

#[test]
fn optimistic_move_applies_synchronously() {
    let a = appointment("A", Scheduled, 0);
    let mut store = store_with_view(std::slice::from_ref(&a));

    let outcome = store
        .optimistic_move(
            a.id,
            MoveTarget {
                status: InProgress,
                position: 0,
            },
        )
        .unwrap();

    // No await in sight: the view is already rewritten
    assert!(matches!(outcome, MoveOutcome::Applied(_)));
    let card = store.card(a.id).unwrap();
    assert_eq!(card.status, InProgress);
    assert_eq!(card.position, 0);
}

#[test]
fn optimistic_move_to_current_slot_is_noop() {
    let a = appointment("A", Scheduled, 0);
    let mut store = store_with_view(std::slice::from_ref(&a));

    let outcome = store
        .optimistic_move(
            a.id,
            MoveTarget {
                status: Scheduled,
                position: 0,
            },
        )
        .unwrap();

    assert!(matches!(outcome, MoveOutcome::Noop));
}

#[test]
fn optimistic_move_unknown_card_is_an_error() {
    let a = appointment("A", Scheduled, 0);
    let mut store = store_with_view(&[a]);

    let result = store.optimistic_move(
        Uuid::new_v4(),
        MoveTarget {
            status: Ready,
            position: 0,
        },
    );

    assert!(result.is_err());
}

#[test]
fn rollback_restores_pre_move_placement_exactly() {
    let a = appointment("A", Scheduled, 0);
    let b = appointment("B", Scheduled, 1);
    let mut store = store_with_view(&[a.clone(), b.clone()]);
    let before = store.view("board").unwrap().clone();

    let ticket = match store
        .optimistic_move(
            b.id,
            MoveTarget {
                status: InProgress,
                position: 0,
            },
        )
        .unwrap()
    {
        MoveOutcome::Applied(ticket) => ticket,
        MoveOutcome::Noop => panic!("expected an applied move"),
    };

    assert_eq!(
        store.view("board").unwrap().placement(b.id),
        Some((InProgress, 0))
    );

    store.restore(ticket.snapshot);

    assert_eq!(store.view("board").unwrap(), &before);
}

#[test]
fn snapshot_covers_every_view_containing_the_card() {
    let a = appointment("A", Scheduled, 0);
    let mut store = BoardStore::new();
    store.insert_view("board:all", BoardState::from_appointments(std::slice::from_ref(&a)));
    store.insert_view("board:tech-1", BoardState::from_appointments(std::slice::from_ref(&a)));
    store.insert_view("board:tech-2", BoardState::from_appointments(&[]));

    let snapshot = store.snapshot_for(a.id);
    let mut keys: Vec<&str> = snapshot.view_keys().collect();
    keys.sort_unstable();

    assert_eq!(keys, vec!["board:all", "board:tech-1"]);
}

#[test]
fn rollback_restores_all_views_and_spares_unrelated_moves() {
    let a = appointment("A", Scheduled, 0);
    let b = appointment("B", Scheduled, 1);
    let mut store = BoardStore::new();
    store.insert_view("board:all", BoardState::from_appointments(&[a.clone(), b.clone()]));
    store.insert_view("board:tech-1", BoardState::from_appointments(std::slice::from_ref(&a)));

    let ticket_a = match store
        .optimistic_move(
            a.id,
            MoveTarget {
                status: Ready,
                position: 0,
            },
        )
        .unwrap()
    {
        MoveOutcome::Applied(ticket) => ticket,
        MoveOutcome::Noop => panic!("expected an applied move"),
    };

    // A concurrent move of another card, after A's snapshot was taken
    let _ticket_b = store
        .optimistic_move(
            b.id,
            MoveTarget {
                status: InProgress,
                position: 0,
            },
        )
        .unwrap();

    store.restore(ticket_a.snapshot);

    // A is back in both views...
    assert_eq!(
        store.view("board:all").unwrap().placement(a.id),
        Some((Scheduled, 0))
    );
    assert_eq!(
        store.view("board:tech-1").unwrap().placement(a.id),
        Some((Scheduled, 0))
    );
    // ...and B's optimistic move survived A's rollback
    assert_eq!(
        store.view("board:all").unwrap().placement(b.id),
        Some((InProgress, 0))
    );
}
