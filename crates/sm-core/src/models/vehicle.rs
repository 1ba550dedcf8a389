use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub customer_id: Uuid,

    pub year: i32,
    pub make: String,
    pub model: String,
    pub license_plate: Option<String>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Vehicle {
    pub fn new(customer_id: Uuid, year: i32, make: String, model: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            customer_id,
            year,
            make,
            model,
            license_plate: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Display string used on board cards, e.g. "2019 Toyota Camry (ABC-123)"
    pub fn display_info(&self) -> String {
        match &self.license_plate {
            Some(plate) => format!("{} {} {} ({})", self.year, self.make, self.model, plate),
            None => format!("{} {} {}", self.year, self.make, self.model),
        }
    }
}
