use crate::Appointment;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canned message with `{placeholder}` slots, filled from an appointment.
///
/// Recognized placeholders: `{customer_name}`, `{vehicle_info}`,
/// `{start_time}`. Unknown placeholders pass through unchanged so a typo is
/// visible in the preview instead of silently vanishing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageTemplate {
    pub id: Uuid,
    pub name: String,
    pub body: String,
}

impl MessageTemplate {
    pub fn new(name: String, body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            body,
        }
    }

    /// Fill placeholders from the appointment's display fields.
    pub fn render(&self, appointment: &Appointment) -> String {
        self.body
            .replace("{customer_name}", &appointment.customer_name)
            .replace("{vehicle_info}", &appointment.vehicle_info)
            .replace(
                "{start_time}",
                &appointment.start_time.format("%Y-%m-%d %H:%M").to_string(),
            )
    }
}
