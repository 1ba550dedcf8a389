use crate::export::csv::{AppointmentField, appointment_rows, write_csv};
use crate::{Appointment, ExportData};

use chrono::{TimeZone, Utc};
use uuid::Uuid;

fn appointment(customer_name: &str, service: &str) -> Appointment {
    let mut appointment = Appointment::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        customer_name.to_string(),
        "2015 Honda Civic".to_string(),
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap(),
    );
    appointment.service_summary = service.to_string();
    appointment
}

#[test]
fn test_three_appointments_yield_header_plus_three_rows() {
    let appointments = vec![
        appointment("Dana Alvarez", "Oil change"),
        appointment("Lee Wong", "Brakes, front and rear"),
        appointment("Sam Ortiz", "Tire rotation"),
    ];
    let fields = [AppointmentField::CustomerName, AppointmentField::Service];

    let rows = appointment_rows(&appointments, &fields);
    let headers: Vec<&str> = fields.iter().map(|f| f.header()).collect();
    let csv = write_csv(&headers, &rows);

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "customer_name,service");
    assert_eq!(lines[1], "Dana Alvarez,Oil change");
    // Field with an embedded comma is quoted
    assert_eq!(lines[2], "Lee Wong,\"Brakes, front and rear\"");
    assert_eq!(lines[3], "Sam Ortiz,Tire rotation");
}

#[test]
fn test_quotes_are_doubled() {
    let appointments = vec![appointment("Pat \"Doc\" Riley", "Diagnostics")];
    let fields = [AppointmentField::CustomerName];

    let csv = write_csv(&["customer_name"], &appointment_rows(&appointments, &fields));

    assert_eq!(csv, "customer_name\n\"Pat \"\"Doc\"\" Riley\"\n");
}

#[test]
fn test_newline_in_field_is_quoted() {
    let appointments = vec![appointment("Line\nBreak", "Oil change")];
    let fields = [AppointmentField::CustomerName, AppointmentField::Service];

    let csv = write_csv(
        &["customer_name", "service"],
        &appointment_rows(&appointments, &fields),
    );

    assert!(csv.starts_with("customer_name,service\n\"Line\nBreak\",Oil change\n"));
}

#[test]
fn test_total_formats_cents_as_dollars() {
    let mut a = appointment("Dana Alvarez", "Oil change");
    a.total_cents = 4999;

    assert_eq!(AppointmentField::Total.extract(&a), "49.99");
}

#[test]
fn test_export_data_carries_schema_version() {
    let data = ExportData::new("sm-cli", vec![], vec![], vec![], vec![]);

    assert_eq!(data.schema_version, crate::export::export_data::SCHEMA_VERSION);
    assert_eq!(data.exported_by, "sm-cli");
    assert!(data.appointments.is_empty());
}
