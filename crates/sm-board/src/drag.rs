use crate::BoardState;

use uuid::Uuid;

use sm_core::AppointmentStatus;

/// Where a card should land: status column plus lane index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTarget {
    pub status: AppointmentStatus,
    pub position: i32,
}

/// A resolved drop, ready to hand to the move engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub card_id: Uuid,
    pub target: MoveTarget,
}

/// Translate a drop event into a move request.
///
/// A card dragged to column `target_status` at visual index `target_index`
/// resolves to `(card_id, target_status, index)`. The index is clamped to
/// the destination lane (excluding the card itself when it stays in its own
/// column). Dropping a card back onto its current slot resolves to `None`
/// so no network call is made; an unknown card also resolves to `None`.
pub fn resolve_drop(
    state: &BoardState,
    card_id: Uuid,
    target_status: AppointmentStatus,
    target_index: usize,
) -> Option<MoveRequest> {
    let (current_status, current_index) = state.placement(card_id)?;

    let lane_len = state.lane(target_status).len();
    let max_index = if target_status == current_status {
        lane_len.saturating_sub(1)
    } else {
        lane_len
    };
    let index = target_index.min(max_index);

    if target_status == current_status && index == current_index {
        return None;
    }

    Some(MoveRequest {
        card_id,
        target: MoveTarget {
            status: target_status,
            position: index as i32,
        },
    })
}
