use crate::BoardCard;

use uuid::Uuid;

/// Pre-move placement of one card in one view: the full card copy plus its
/// lane index at capture time.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CardPlacement {
    pub(crate) card: BoardCard,
    pub(crate) index: usize,
}

/// Rollback state for an optimistic move, captured before the local rewrite.
///
/// One entry per cached view containing the card (e.g. the all-bays board
/// and a technician's board). Restoring re-seats exactly the captured card
/// in each view; other cards' optimistic state is left alone, so two
/// in-flight moves of different cards never clobber each other's rollbacks.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    pub(crate) card_id: Uuid,
    pub(crate) views: Vec<(String, CardPlacement)>,
}

impl BoardSnapshot {
    pub fn card_id(&self) -> Uuid {
        self.card_id
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Keys of the captured views
    pub fn view_keys(&self) -> impl Iterator<Item = &str> {
        self.views.iter().map(|(key, _)| key.as_str())
    }
}
