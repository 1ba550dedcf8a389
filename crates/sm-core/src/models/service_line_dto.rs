use crate::models::datetime_from_epoch;
use crate::{Result, ServiceLine};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Service line DTO for JSON serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceLineDto {
    pub id: String,
    pub appointment_id: String,
    pub name: String,
    pub price_cents: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl ServiceLineDto {
    pub fn from_service_line(s: &ServiceLine) -> Self {
        Self {
            id: s.id.to_string(),
            appointment_id: s.appointment_id.to_string(),
            name: s.name.clone(),
            price_cents: s.price_cents,
            created_at: s.created_at.timestamp(),
            updated_at: s.updated_at.timestamp(),
        }
    }
}

impl TryFrom<ServiceLineDto> for ServiceLine {
    type Error = crate::CoreError;

    fn try_from(dto: ServiceLineDto) -> Result<Self> {
        Ok(Self {
            id: Uuid::parse_str(&dto.id)?,
            appointment_id: Uuid::parse_str(&dto.appointment_id)?,
            name: dto.name,
            price_cents: dto.price_cents,
            created_at: datetime_from_epoch(dto.created_at)?,
            updated_at: datetime_from_epoch(dto.updated_at)?,
            deleted_at: None,
        })
    }
}
