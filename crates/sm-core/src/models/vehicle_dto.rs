use crate::models::datetime_from_epoch;
use crate::{Result, Vehicle};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Vehicle DTO for JSON serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleDto {
    pub id: String,
    pub customer_id: String,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub license_plate: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl VehicleDto {
    pub fn from_vehicle(v: &Vehicle) -> Self {
        Self {
            id: v.id.to_string(),
            customer_id: v.customer_id.to_string(),
            year: v.year,
            make: v.make.clone(),
            model: v.model.clone(),
            license_plate: v.license_plate.clone(),
            created_at: v.created_at.timestamp(),
            updated_at: v.updated_at.timestamp(),
        }
    }
}

impl TryFrom<VehicleDto> for Vehicle {
    type Error = crate::CoreError;

    fn try_from(dto: VehicleDto) -> Result<Self> {
        Ok(Self {
            id: Uuid::parse_str(&dto.id)?,
            customer_id: Uuid::parse_str(&dto.customer_id)?,
            year: dto.year,
            make: dto.make,
            model: dto.model,
            license_plate: dto.license_plate,
            created_at: datetime_from_epoch(dto.created_at)?,
            updated_at: datetime_from_epoch(dto.updated_at)?,
            deleted_at: None,
        })
    }
}
