use crate::models::datetime_from_epoch;
use crate::{Appointment, AppointmentStatus, Result};

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Appointment DTO for JSON serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentDto {
    pub id: String,
    pub customer_id: String,
    pub vehicle_id: String,
    pub customer_name: String,
    pub vehicle_info: String,
    pub service_summary: String,
    pub status: String,
    pub position: i32,
    pub version: i32,
    pub start_time: i64,
    pub end_time: Option<i64>,
    pub technician_id: Option<String>,
    pub notes: Option<String>,
    pub total_cents: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl AppointmentDto {
    /// Convert from domain model
    pub fn from_appointment(a: &Appointment) -> Self {
        Self {
            id: a.id.to_string(),
            customer_id: a.customer_id.to_string(),
            vehicle_id: a.vehicle_id.to_string(),
            customer_name: a.customer_name.clone(),
            vehicle_info: a.vehicle_info.clone(),
            service_summary: a.service_summary.clone(),
            status: a.status.as_str().to_string(),
            position: a.position,
            version: a.version,
            start_time: a.start_time.timestamp(),
            end_time: a.end_time.map(|t| t.timestamp()),
            technician_id: a.technician_id.map(|id| id.to_string()),
            notes: a.notes.clone(),
            total_cents: a.total_cents,
            created_at: a.created_at.timestamp(),
            updated_at: a.updated_at.timestamp(),
        }
    }
}

impl TryFrom<AppointmentDto> for Appointment {
    type Error = crate::CoreError;

    /// Validate the wire payload once, at the API boundary.
    fn try_from(dto: AppointmentDto) -> Result<Self> {
        Ok(Self {
            id: Uuid::parse_str(&dto.id)?,
            customer_id: Uuid::parse_str(&dto.customer_id)?,
            vehicle_id: Uuid::parse_str(&dto.vehicle_id)?,
            customer_name: dto.customer_name,
            vehicle_info: dto.vehicle_info,
            service_summary: dto.service_summary,
            status: AppointmentStatus::from_str(&dto.status)?,
            position: dto.position,
            version: dto.version,
            start_time: datetime_from_epoch(dto.start_time)?,
            end_time: dto.end_time.map(datetime_from_epoch).transpose()?,
            technician_id: dto
                .technician_id
                .as_deref()
                .map(Uuid::parse_str)
                .transpose()?,
            notes: dto.notes,
            total_cents: dto.total_cents,
            created_at: datetime_from_epoch(dto.created_at)?,
            updated_at: datetime_from_epoch(dto.updated_at)?,
            deleted_at: None,
        })
    }
}
