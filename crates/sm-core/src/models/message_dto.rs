use crate::models::datetime_from_epoch;
use crate::{Message, MessageDirection, Result};

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Message DTO for JSON serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: String,
    pub appointment_id: String,
    pub direction: String,
    pub body: String,
    pub sent_at: i64,
}

impl MessageDto {
    pub fn from_message(m: &Message) -> Self {
        Self {
            id: m.id.to_string(),
            appointment_id: m.appointment_id.to_string(),
            direction: m.direction.as_str().to_string(),
            body: m.body.clone(),
            sent_at: m.sent_at.timestamp(),
        }
    }
}

impl TryFrom<MessageDto> for Message {
    type Error = crate::CoreError;

    fn try_from(dto: MessageDto) -> Result<Self> {
        Ok(Self {
            id: Uuid::parse_str(&dto.id)?,
            appointment_id: Uuid::parse_str(&dto.appointment_id)?,
            direction: MessageDirection::from_str(&dto.direction)?,
            body: dto.body,
            sent_at: datetime_from_epoch(dto.sent_at)?,
        })
    }
}
