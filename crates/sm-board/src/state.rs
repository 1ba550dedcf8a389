use crate::{BoardCard, BoardColumn, BoardError, Result};

use std::collections::HashMap;

use uuid::Uuid;

use sm_core::{ALL_STATUSES, Appointment, AppointmentStatus};

/// One cached board view: cards keyed by id plus per-status lane ordering.
///
/// Invariants, re-established after every mutation:
/// - a card id appears in exactly one lane;
/// - `position` on each card equals its index within its lane.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardState {
    cards: HashMap<Uuid, BoardCard>,
    lanes: HashMap<AppointmentStatus, Vec<Uuid>>,
}

impl BoardState {
    /// Build a view from a server board payload. Lanes are ordered by the
    /// server-assigned position; ties keep the payload order.
    pub fn from_appointments(appointments: &[Appointment]) -> Self {
        let mut state = Self::default();

        for appointment in appointments {
            let card = BoardCard::from_appointment(appointment);
            state.lanes.entry(card.status).or_default().push(card.id);
            state.cards.insert(card.id, card);
        }

        for status in ALL_STATUSES {
            if let Some(lane) = state.lanes.get_mut(&status) {
                let cards = &state.cards;
                lane.sort_by_key(|id| cards[id].position);
            }
            state.reindex(status);
        }

        state
    }

    pub fn contains(&self, card_id: Uuid) -> bool {
        self.cards.contains_key(&card_id)
    }

    pub fn card(&self, card_id: Uuid) -> Option<&BoardCard> {
        self.cards.get(&card_id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Ordered card ids in one status lane
    pub fn lane(&self, status: AppointmentStatus) -> &[Uuid] {
        self.lanes.get(&status).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Current (status, lane index) of a card
    pub fn placement(&self, card_id: Uuid) -> Option<(AppointmentStatus, usize)> {
        let card = self.cards.get(&card_id)?;
        let index = self.lane(card.status).iter().position(|id| *id == card_id)?;
        Some((card.status, index))
    }

    /// Derived column aggregates, in board order
    pub fn columns(&self) -> Vec<BoardColumn> {
        ALL_STATUSES
            .iter()
            .map(|status| {
                let mut column = BoardColumn::empty(*status);
                for id in self.lane(*status) {
                    column.count += 1;
                    column.sum_cents += self.cards[id].total_cents;
                }
                column
            })
            .collect()
    }

    /// Move a card to `status` at lane index `index` (clamped), rewriting
    /// positions in both affected lanes. Purely local; versions untouched.
    pub fn apply_move(
        &mut self,
        card_id: Uuid,
        status: AppointmentStatus,
        index: usize,
    ) -> Result<()> {
        if !self.cards.contains_key(&card_id) {
            return Err(BoardError::unknown_card(card_id));
        }

        let old_status = self.cards[&card_id].status;
        self.detach(card_id, old_status);

        let lane = self.lanes.entry(status).or_default();
        let index = index.min(lane.len());
        lane.insert(index, card_id);

        if let Some(card) = self.cards.get_mut(&card_id) {
            card.status = status;
        }

        self.reindex(old_status);
        if status != old_status {
            self.reindex(status);
        }

        Ok(())
    }

    /// Fold the server's authoritative copy back in. Display fields and the
    /// version always win; if the server placed the card elsewhere, the card
    /// is re-seated and both lanes reindexed (identical values leave the
    /// ordering untouched, so a matching response causes no movement).
    pub fn reconcile(&mut self, appointment: &Appointment) {
        if !self.cards.contains_key(&appointment.id) {
            return;
        }

        let authoritative = BoardCard::from_appointment(appointment);
        let placement = self.placement(appointment.id);

        let moved = match placement {
            Some((status, index)) => {
                status != authoritative.status || index as i32 != authoritative.position
            }
            None => true,
        };

        if moved {
            let old_status = self.cards[&appointment.id].status;
            self.detach(appointment.id, old_status);

            let lane = self.lanes.entry(authoritative.status).or_default();
            let index = (authoritative.position.max(0) as usize).min(lane.len());
            lane.insert(index, appointment.id);

            self.cards.insert(appointment.id, authoritative);
            self.reindex(old_status);
        } else {
            self.cards.insert(appointment.id, authoritative);
        }

        self.reindex(appointment.status);
    }

    /// Put a card back exactly where a snapshot captured it: same fields,
    /// same lane, same index. Other cards are untouched apart from the
    /// position rewrite in the two affected lanes.
    pub(crate) fn restore_card(&mut self, card: &BoardCard, index: usize) {
        let current_status = match self.cards.get(&card.id) {
            Some(existing) => existing.status,
            None => return,
        };
        self.detach(card.id, current_status);

        let lane = self.lanes.entry(card.status).or_default();
        let index = index.min(lane.len());
        lane.insert(index, card.id);
        self.cards.insert(card.id, card.clone());

        self.reindex(current_status);
        if card.status != current_status {
            self.reindex(card.status);
        }
    }

    /// Drop a card entirely (explicit delete confirmed by the backend)
    pub fn remove(&mut self, card_id: Uuid) {
        if let Some(card) = self.cards.remove(&card_id) {
            let status = card.status;
            self.detach(card_id, status);
            self.reindex(status);
        }
    }

    fn detach(&mut self, card_id: Uuid, status: AppointmentStatus) {
        if let Some(lane) = self.lanes.get_mut(&status) {
            lane.retain(|id| *id != card_id);
        }
    }

    fn reindex(&mut self, status: AppointmentStatus) {
        if let Some(lane) = self.lanes.get(&status) {
            for (i, id) in lane.iter().enumerate() {
                if let Some(card) = self.cards.get_mut(id) {
                    card.position = i as i32;
                }
            }
        }
    }
}
