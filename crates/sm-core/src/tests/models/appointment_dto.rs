use crate::{Appointment, AppointmentDto, AppointmentStatus, CoreError};

fn sample_dto() -> AppointmentDto {
    AppointmentDto {
        id: "00000000-0000-0000-0000-000000000001".to_string(),
        customer_id: "00000000-0000-0000-0000-000000000002".to_string(),
        vehicle_id: "00000000-0000-0000-0000-000000000003".to_string(),
        customer_name: "Dana Alvarez".to_string(),
        vehicle_info: "2019 Toyota Camry (ABC-123)".to_string(),
        service_summary: "Oil change".to_string(),
        status: "scheduled".to_string(),
        position: 1,
        version: 1,
        start_time: 1704067200,
        end_time: None,
        technician_id: None,
        notes: None,
        total_cents: 4999,
        created_at: 1704067200,
        updated_at: 1704067200,
    }
}

#[test]
fn test_valid_dto_converts() {
    let appointment = Appointment::try_from(sample_dto()).unwrap();

    assert_eq!(appointment.customer_name, "Dana Alvarez");
    assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    assert_eq!(appointment.position, 1);
    assert_eq!(appointment.version, 1);
    assert_eq!(appointment.total_cents, 4999);
}

#[test]
fn test_unknown_status_rejected_at_boundary() {
    let mut dto = sample_dto();
    dto.status = "SCHEDULED".to_string();

    let err = Appointment::try_from(dto).unwrap_err();
    assert!(matches!(
        err,
        CoreError::InvalidAppointmentStatus { ref value, .. } if value == "SCHEDULED"
    ));
}

#[test]
fn test_malformed_id_rejected_at_boundary() {
    let mut dto = sample_dto();
    dto.id = "not-a-uuid".to_string();

    assert!(matches!(
        Appointment::try_from(dto),
        Err(CoreError::Uuid { .. })
    ));
}

#[test]
fn test_out_of_range_timestamp_rejected() {
    let mut dto = sample_dto();
    dto.start_time = i64::MAX;

    assert!(matches!(
        Appointment::try_from(dto),
        Err(CoreError::InvalidTimestamp { .. })
    ));
}

#[test]
fn test_round_trip_preserves_fields() {
    let appointment = Appointment::try_from(sample_dto()).unwrap();
    let dto = AppointmentDto::from_appointment(&appointment);

    assert_eq!(dto.id, "00000000-0000-0000-0000-000000000001");
    assert_eq!(dto.status, "scheduled");
    assert_eq!(dto.start_time, 1704067200);
}
