use crate::models::appointment_status::AppointmentStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of a customer's visit history (read-only view).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub appointment_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub total_cents: i64,
    pub services: Vec<String>,
}
