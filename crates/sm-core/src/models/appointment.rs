use crate::models::appointment_status::AppointmentStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vehicle_id: Uuid,

    // Denormalized display fields (server-computed)
    pub customer_name: String,
    pub vehicle_info: String,
    /// Joined service line names, e.g. "Oil change, Tire rotation"
    pub service_summary: String,

    // Board placement
    pub status: AppointmentStatus,
    pub position: i32,
    pub version: i32,

    // Schedule
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,

    pub technician_id: Option<Uuid>,
    pub notes: Option<String>,

    /// Sum of service line prices, in cents
    pub total_cents: i64,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Appointment {
    pub fn new(
        customer_id: Uuid,
        vehicle_id: Uuid,
        customer_name: String,
        vehicle_info: String,
        start_time: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            customer_id,
            vehicle_id,
            customer_name,
            vehicle_info,
            service_summary: String::new(),
            status: AppointmentStatus::Scheduled,
            position: 0,
            version: 1,
            start_time,
            end_time: None,
            technician_id: None,
            notes: None,
            total_cents: 0,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}
