use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceLine {
    pub id: Uuid,
    pub appointment_id: Uuid,

    pub name: String,
    pub price_cents: i64,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ServiceLine {
    pub fn new(appointment_id: Uuid, name: String, price_cents: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            appointment_id,
            name,
            price_cents,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}
