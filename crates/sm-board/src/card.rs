use chrono::{DateTime, Utc};
use uuid::Uuid;

use sm_core::{Appointment, AppointmentStatus};

/// Board-facing projection of an appointment: the fields a card renders,
/// plus the placement and version the move protocol needs.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardCard {
    pub id: Uuid,
    pub customer_name: String,
    pub vehicle_info: String,
    pub service_summary: String,
    pub status: AppointmentStatus,
    pub position: i32,
    pub version: i32,
    pub start_time: DateTime<Utc>,
    pub technician_id: Option<Uuid>,
    pub total_cents: i64,
}

impl BoardCard {
    pub fn from_appointment(a: &Appointment) -> Self {
        Self {
            id: a.id,
            customer_name: a.customer_name.clone(),
            vehicle_info: a.vehicle_info.clone(),
            service_summary: a.service_summary.clone(),
            status: a.status,
            position: a.position,
            version: a.version,
            start_time: a.start_time,
            technician_id: a.technician_id,
            total_cents: a.total_cents,
        }
    }

    /// Short time label shown on the card, e.g. "09:30"
    pub fn start_label(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }
}
