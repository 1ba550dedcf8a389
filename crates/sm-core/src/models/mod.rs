pub mod appointment;
pub mod appointment_dto;
pub mod appointment_status;
pub mod customer;
pub mod customer_dto;
pub mod history_entry;
pub mod history_entry_dto;
pub mod message;
pub mod message_dto;
pub mod message_template;
pub mod message_template_dto;
pub mod service_line;
pub mod service_line_dto;
pub mod vehicle;
pub mod vehicle_dto;

use crate::{CoreError, Result};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

/// Convert epoch seconds from the wire into a UTC timestamp.
/// Out-of-range values are rejected at the API boundary.
#[track_caller]
pub(crate) fn datetime_from_epoch(secs: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or(CoreError::InvalidTimestamp {
        value: secs,
        location: ErrorLocation::from(Location::caller()),
    })
}
