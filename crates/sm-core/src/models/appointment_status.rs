use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Appointment workflow status — the board's column vocabulary.
///
/// One canonical set of values; the wire format and CLI arguments both use
/// the snake_case strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    /// Booked, vehicle not yet in the shop
    #[default]
    Scheduled,
    /// Vehicle in a bay, work underway
    InProgress,
    /// Work done, awaiting pickup
    Ready,
    /// Picked up and paid
    Completed,
    /// Customer never arrived
    NoShow,
    /// Canceled before work started
    Canceled,
}

/// Column order on the board, left to right.
pub const ALL_STATUSES: [AppointmentStatus; 6] = [
    AppointmentStatus::Scheduled,
    AppointmentStatus::InProgress,
    AppointmentStatus::Ready,
    AppointmentStatus::Completed,
    AppointmentStatus::NoShow,
    AppointmentStatus::Canceled,
];

impl AppointmentStatus {
    /// Convert to wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Ready => "ready",
            Self::Completed => "completed",
            Self::NoShow => "no_show",
            Self::Canceled => "canceled",
        }
    }

    /// Human-readable column title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::InProgress => "In Progress",
            Self::Ready => "Ready",
            Self::Completed => "Completed",
            Self::NoShow => "No Show",
            Self::Canceled => "Canceled",
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "in_progress" => Ok(Self::InProgress),
            "ready" => Ok(Self::Ready),
            "completed" => Ok(Self::Completed),
            "no_show" => Ok(Self::NoShow),
            "canceled" => Ok(Self::Canceled),
            _ => Err(CoreError::InvalidAppointmentStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
