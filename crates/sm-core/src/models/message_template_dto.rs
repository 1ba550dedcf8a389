use crate::{MessageTemplate, Result};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Template DTO for JSON serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageTemplateDto {
    pub id: String,
    pub name: String,
    pub body: String,
}

impl MessageTemplateDto {
    pub fn from_template(t: &MessageTemplate) -> Self {
        Self {
            id: t.id.to_string(),
            name: t.name.clone(),
            body: t.body.clone(),
        }
    }
}

impl TryFrom<MessageTemplateDto> for MessageTemplate {
    type Error = crate::CoreError;

    fn try_from(dto: MessageTemplateDto) -> Result<Self> {
        Ok(Self {
            id: Uuid::parse_str(&dto.id)?,
            name: dto.name,
            body: dto.body,
        })
    }
}
