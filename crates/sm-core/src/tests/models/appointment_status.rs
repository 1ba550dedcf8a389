use crate::{ALL_STATUSES, AppointmentStatus};

use std::str::FromStr;

#[test]
fn test_appointment_status_as_str() {
    assert_eq!(AppointmentStatus::Scheduled.as_str(), "scheduled");
    assert_eq!(AppointmentStatus::InProgress.as_str(), "in_progress");
    assert_eq!(AppointmentStatus::Ready.as_str(), "ready");
    assert_eq!(AppointmentStatus::Completed.as_str(), "completed");
    assert_eq!(AppointmentStatus::NoShow.as_str(), "no_show");
    assert_eq!(AppointmentStatus::Canceled.as_str(), "canceled");
}

#[test]
fn test_appointment_status_from_str() {
    for status in ALL_STATUSES {
        assert_eq!(
            AppointmentStatus::from_str(status.as_str()).unwrap(),
            status
        );
    }
    assert!(AppointmentStatus::from_str("invalid").is_err());
}

#[test]
fn test_appointment_status_rejects_legacy_uppercase() {
    // The old console mixed SCREAMING and snake_case vocabularies; only the
    // snake_case one survives.
    assert!(AppointmentStatus::from_str("SCHEDULED").is_err());
    assert!(AppointmentStatus::from_str("IN_PROGRESS").is_err());
}

#[test]
fn test_appointment_status_default() {
    assert_eq!(AppointmentStatus::default(), AppointmentStatus::Scheduled);
}

#[test]
fn test_appointment_status_titles() {
    assert_eq!(AppointmentStatus::InProgress.title(), "In Progress");
    assert_eq!(AppointmentStatus::NoShow.title(), "No Show");
}
