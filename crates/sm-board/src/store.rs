use crate::snapshot::CardPlacement;
use crate::{BoardCard, BoardError, BoardSnapshot, BoardState, MoveTarget, Result};

use std::collections::HashMap;

use uuid::Uuid;

use sm_core::Appointment;

/// Outcome of a local optimistic move.
#[derive(Debug)]
pub enum MoveOutcome {
    /// Target equals the card's current placement everywhere; nothing to do
    /// and nothing to send.
    Noop,
    /// Local state rewritten; the ticket carries what the PATCH needs and
    /// the snapshot rollback would restore.
    Applied(MoveTicket),
}

/// Handle for an in-flight optimistic move.
#[derive(Debug)]
pub struct MoveTicket {
    pub card_id: Uuid,
    pub target: MoveTarget,
    /// Version the card had before the local rewrite; sent as
    /// `expected_version` so the server can detect staleness.
    pub base_version: i32,
    pub snapshot: BoardSnapshot,
}

/// Keyed store over every cached board view.
///
/// The admin console keeps several views of the same appointments alive at
/// once (all bays, one per technician). Mutations go through this store so
/// a card's move lands in every view that shows it, and so rollback can
/// restore all of them verbatim.
#[derive(Debug, Clone, Default)]
pub struct BoardStore {
    views: HashMap<String, BoardState>,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_view<S: Into<String>>(&mut self, key: S, state: BoardState) {
        self.views.insert(key.into(), state);
    }

    pub fn view(&self, key: &str) -> Option<&BoardState> {
        self.views.get(key)
    }

    pub fn view_keys(&self) -> impl Iterator<Item = &str> {
        self.views.keys().map(String::as_str)
    }

    /// First view's copy of a card (all views agree on status/version)
    pub fn card(&self, card_id: Uuid) -> Option<&BoardCard> {
        self.views.values().find_map(|state| state.card(card_id))
    }

    /// Keys of views currently containing the card
    pub fn views_containing(&self, card_id: Uuid) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .views
            .iter()
            .filter(|(_, state)| state.contains(card_id))
            .map(|(key, _)| key.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }

    /// Capture the card's placement in every view containing it.
    pub fn snapshot_for(&self, card_id: Uuid) -> BoardSnapshot {
        BoardSnapshot {
            card_id,
            views: self
                .views
                .iter()
                .filter_map(|(key, state)| {
                    let card = state.card(card_id)?;
                    let (_, index) = state.placement(card_id)?;
                    Some((
                        key.clone(),
                        CardPlacement {
                            card: card.clone(),
                            index,
                        },
                    ))
                })
                .collect(),
        }
    }

    /// Re-seat the captured card in every captured view, exactly as it was.
    pub fn restore(&mut self, snapshot: BoardSnapshot) {
        for (key, placement) in snapshot.views {
            if let Some(state) = self.views.get_mut(&key) {
                state.restore_card(&placement.card, placement.index);
            }
        }
    }

    /// Apply a status/position move locally, before any network traffic.
    ///
    /// Captures the rollback snapshot first, then rewrites every view that
    /// contains the card. Returns `Noop` (no snapshot, no ticket) when the
    /// card already sits at the target in every view.
    pub fn optimistic_move(&mut self, card_id: Uuid, target: MoveTarget) -> Result<MoveOutcome> {
        let card = self
            .card(card_id)
            .ok_or_else(|| BoardError::unknown_card(card_id))?;
        let base_version = card.version;

        let already_there = self
            .views
            .values()
            .filter(|state| state.contains(card_id))
            .all(|state| {
                state.placement(card_id)
                    == Some((target.status, target.position.max(0) as usize))
            });
        if already_there {
            return Ok(MoveOutcome::Noop);
        }

        let snapshot = self.snapshot_for(card_id);

        let index = target.position.max(0) as usize;
        for state in self.views.values_mut() {
            if state.contains(card_id) {
                state.apply_move(card_id, target.status, index)?;
            }
        }

        Ok(MoveOutcome::Applied(MoveTicket {
            card_id,
            target,
            base_version,
            snapshot,
        }))
    }

    /// Fold the server's authoritative appointment into every view.
    pub fn reconcile(&mut self, appointment: &Appointment) {
        for state in self.views.values_mut() {
            state.reconcile(appointment);
        }
    }

    /// Drop a card from every view (explicit delete confirmed by the backend)
    pub fn remove(&mut self, card_id: Uuid) {
        for state in self.views.values_mut() {
            state.remove(card_id);
        }
    }
}
