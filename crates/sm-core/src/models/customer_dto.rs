use crate::models::datetime_from_epoch;
use crate::{Customer, Result};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Customer DTO for JSON serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDto {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl CustomerDto {
    pub fn from_customer(c: &Customer) -> Self {
        Self {
            id: c.id.to_string(),
            first_name: c.first_name.clone(),
            last_name: c.last_name.clone(),
            phone: c.phone.clone(),
            email: c.email.clone(),
            created_at: c.created_at.timestamp(),
            updated_at: c.updated_at.timestamp(),
        }
    }
}

impl TryFrom<CustomerDto> for Customer {
    type Error = crate::CoreError;

    fn try_from(dto: CustomerDto) -> Result<Self> {
        Ok(Self {
            id: Uuid::parse_str(&dto.id)?,
            first_name: dto.first_name,
            last_name: dto.last_name,
            phone: dto.phone,
            email: dto.email,
            created_at: datetime_from_epoch(dto.created_at)?,
            updated_at: datetime_from_epoch(dto.updated_at)?,
            deleted_at: None,
        })
    }
}
