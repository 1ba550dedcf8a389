use crate::models::datetime_from_epoch;
use crate::{AppointmentStatus, HistoryEntry, Result};

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// History entry DTO for JSON serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntryDto {
    pub appointment_id: String,
    pub start_time: i64,
    pub status: String,
    pub total_cents: i64,
    pub services: Vec<String>,
}

impl HistoryEntryDto {
    pub fn from_history_entry(h: &HistoryEntry) -> Self {
        Self {
            appointment_id: h.appointment_id.to_string(),
            start_time: h.start_time.timestamp(),
            status: h.status.as_str().to_string(),
            total_cents: h.total_cents,
            services: h.services.clone(),
        }
    }
}

impl TryFrom<HistoryEntryDto> for HistoryEntry {
    type Error = crate::CoreError;

    fn try_from(dto: HistoryEntryDto) -> Result<Self> {
        Ok(Self {
            appointment_id: Uuid::parse_str(&dto.appointment_id)?,
            start_time: datetime_from_epoch(dto.start_time)?,
            status: AppointmentStatus::from_str(&dto.status)?,
            total_cents: dto.total_cents,
            services: dto.services,
        })
    }
}
