use crate::{AppointmentDto, CustomerDto, MessageDto, VehicleDto};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Current export schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Complete export payload containing all visible entity types
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportData {
    /// Schema version for compatibility checks (current: 1)
    pub schema_version: u32,

    /// RFC3339 timestamp when data was exported
    pub exported_at: String,

    /// Source identifier (e.g., "sm-cli")
    pub exported_by: String,

    /// All visible appointments
    pub appointments: Vec<AppointmentDto>,

    /// All customers
    pub customers: Vec<CustomerDto>,

    /// All vehicles
    pub vehicles: Vec<VehicleDto>,

    /// All messages
    pub messages: Vec<MessageDto>,
}

impl ExportData {
    pub fn new(
        exported_by: &str,
        appointments: Vec<AppointmentDto>,
        customers: Vec<CustomerDto>,
        vehicles: Vec<VehicleDto>,
        messages: Vec<MessageDto>,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            exported_at: Utc::now().to_rfc3339(),
            exported_by: exported_by.to_string(),
            appointments,
            customers,
            vehicles,
            messages,
        }
    }
}
