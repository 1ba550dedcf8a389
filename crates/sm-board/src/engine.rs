use crate::{
    BoardCard, BoardColumn, BoardError, BoardState, BoardStore, MoveOutcome, MoveRequest, Result,
    RetryPolicy, StatusGateway, drag, retry::with_retry,
};

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;
use uuid::Uuid;

use sm_core::{Appointment, AppointmentStatus};

/// How a submitted move settled.
#[derive(Debug)]
pub enum MoveResolution {
    /// Target equalled the current placement; nothing was sent
    Noop,
    /// Server confirmed; authoritative copy reconciled into every view
    Applied(Appointment),
    /// A newer move for the same card was submitted while this one was in
    /// flight; this response was discarded as stale
    Superseded,
    /// Local state restored to the pre-move snapshot
    RolledBack { error: BoardError },
}

/// The optimistic mutator.
///
/// `submit_move` rewrites the cached views synchronously, then settles the
/// PATCH in the background of the caller's await: reconcile on success,
/// restore the snapshot (and refetch, for conflicts) on failure. Rapid
/// moves of one card serialize by supersession: each submission bumps a
/// per-card sequence, and a completing request that is no longer the newest
/// is dropped without touching the store.
pub struct MoveEngine<G: StatusGateway> {
    gateway: G,
    retry: RetryPolicy,
    store: Mutex<BoardStore>,
    /// view key -> technician filter used to refetch it
    view_filters: Mutex<HashMap<String, Option<Uuid>>>,
    /// card id -> sequence of the newest in-flight move
    inflight: Mutex<HashMap<Uuid, u64>>,
    next_seq: AtomicU64,
}

impl<G: StatusGateway> MoveEngine<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_retry_policy(gateway, RetryPolicy::default())
    }

    pub fn with_retry_policy(gateway: G, retry: RetryPolicy) -> Self {
        Self {
            gateway,
            retry,
            store: Mutex::new(BoardStore::new()),
            view_filters: Mutex::new(HashMap::new()),
            inflight: Mutex::new(HashMap::new()),
            next_seq: AtomicU64::new(1),
        }
    }

    /// Fetch a board view from the server and cache it under `key`.
    pub async fn load_view(&self, key: &str, technician_id: Option<Uuid>) -> Result<()> {
        let appointments = with_retry(&self.retry, "fetch_board", || {
            self.gateway.fetch_board(technician_id)
        })
        .await
        .map_err(BoardError::from)?;

        self.register_view(key, technician_id, &appointments).await;
        Ok(())
    }

    /// Cache an already-fetched view under `key`.
    pub async fn register_view(
        &self,
        key: &str,
        technician_id: Option<Uuid>,
        appointments: &[Appointment],
    ) {
        let state = BoardState::from_appointments(appointments);
        self.store.lock().await.insert_view(key, state);
        self.view_filters
            .lock()
            .await
            .insert(key.to_string(), technician_id);
    }

    /// Current copy of a card, from whichever view holds it
    pub async fn card(&self, card_id: Uuid) -> Option<BoardCard> {
        self.store.lock().await.card(card_id).cloned()
    }

    /// (status, lane index) of a card within one view
    pub async fn placement(
        &self,
        view: &str,
        card_id: Uuid,
    ) -> Result<Option<(AppointmentStatus, usize)>> {
        let store = self.store.lock().await;
        let state = store
            .view(view)
            .ok_or_else(|| BoardError::unknown_view(view))?;
        Ok(state.placement(card_id))
    }

    /// Derived column aggregates for one view
    pub async fn columns(&self, view: &str) -> Result<Vec<BoardColumn>> {
        let store = self.store.lock().await;
        let state = store
            .view(view)
            .ok_or_else(|| BoardError::unknown_view(view))?;
        Ok(state.columns())
    }

    /// Columns of one view together with their ordered cards
    pub async fn column_cards(&self, view: &str) -> Result<Vec<(BoardColumn, Vec<BoardCard>)>> {
        let store = self.store.lock().await;
        let state = store
            .view(view)
            .ok_or_else(|| BoardError::unknown_view(view))?;

        Ok(state
            .columns()
            .into_iter()
            .map(|column| {
                let cards = state
                    .lane(column.status)
                    .iter()
                    .filter_map(|id| state.card(*id).cloned())
                    .collect();
                (column, cards)
            })
            .collect())
    }

    /// Resolve a drop event against one view; `None` is a no-op drop.
    pub async fn resolve_drop(
        &self,
        view: &str,
        card_id: Uuid,
        target_status: AppointmentStatus,
        target_index: usize,
    ) -> Result<Option<MoveRequest>> {
        let store = self.store.lock().await;
        let state = store
            .view(view)
            .ok_or_else(|| BoardError::unknown_view(view))?;
        Ok(drag::resolve_drop(state, card_id, target_status, target_index))
    }

    /// Apply a move optimistically and settle it against the server.
    ///
    /// Local state is rewritten before the PATCH is sent; the returned
    /// resolution says how the move settled. `Err` is reserved for
    /// pre-conditions (unknown card); settlement failures roll back and
    /// come back as `RolledBack`.
    pub async fn submit_move(&self, request: MoveRequest) -> Result<MoveResolution> {
        let ticket = {
            let mut store = self.store.lock().await;
            match store.optimistic_move(request.card_id, request.target)? {
                MoveOutcome::Noop => return Ok(MoveResolution::Noop),
                MoveOutcome::Applied(ticket) => ticket,
            }
        };

        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.inflight.lock().await.insert(request.card_id, seq);

        let result = with_retry(&self.retry, "move_appointment", || {
            self.gateway.move_appointment(
                ticket.card_id,
                ticket.target.status,
                ticket.target.position,
                ticket.base_version,
            )
        })
        .await;

        // A newer move for this card owns the outcome now; this response is
        // stale either way.
        {
            let mut inflight = self.inflight.lock().await;
            match inflight.get(&request.card_id) {
                Some(&current) if current == seq => {
                    inflight.remove(&request.card_id);
                }
                _ => return Ok(MoveResolution::Superseded),
            }
        }

        match result {
            Ok(appointment) => {
                self.store.lock().await.reconcile(&appointment);
                Ok(MoveResolution::Applied(appointment))
            }
            Err(e) => {
                let error = BoardError::from(e);
                self.store.lock().await.restore(ticket.snapshot);

                if error.is_conflict() {
                    log::warn!(
                        "move of {} rejected as stale; rolled back, refetching board",
                        request.card_id
                    );
                    if let Err(refetch) = self.refresh_views().await {
                        log::warn!("board refetch after conflict failed: {}", refetch);
                    }
                } else {
                    log::warn!("move of {} failed: {}; rolled back", request.card_id, error);
                }

                Ok(MoveResolution::RolledBack { error })
            }
        }
    }

    /// Replace every registered view with a fresh fetch.
    ///
    /// Skipped while a move is in flight so a poll can never clobber an
    /// optimistic state that is still settling.
    pub async fn refresh_views(&self) -> Result<()> {
        {
            let inflight = self.inflight.lock().await;
            if !inflight.is_empty() {
                log::debug!("skipping refresh: {} move(s) in flight", inflight.len());
                return Ok(());
            }
        }

        let filters: Vec<(String, Option<Uuid>)> = self
            .view_filters
            .lock()
            .await
            .iter()
            .map(|(key, filter)| (key.clone(), *filter))
            .collect();

        for (key, technician_id) in filters {
            let appointments = with_retry(&self.retry, "fetch_board", || {
                self.gateway.fetch_board(technician_id)
            })
            .await
            .map_err(BoardError::from)?;

            let state = BoardState::from_appointments(&appointments);
            self.store.lock().await.insert_view(key, state);
        }

        Ok(())
    }

    /// Drop a card from every cached view after a confirmed delete.
    pub async fn remove_card(&self, card_id: Uuid) {
        self.store.lock().await.remove(card_id);
    }
}
