use crate::{Appointment, MessageTemplate};

use chrono::{TimeZone, Utc};
use uuid::Uuid;

fn sample_appointment() -> Appointment {
    let mut appointment = Appointment::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        "Dana Alvarez".to_string(),
        "2019 Toyota Camry".to_string(),
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap(),
    );
    appointment.service_summary = "Brake inspection".to_string();
    appointment
}

#[test]
fn test_render_fills_placeholders() {
    let template = MessageTemplate::new(
        "reminder".to_string(),
        "Hi {customer_name}, your {vehicle_info} is booked for {start_time}.".to_string(),
    );

    let rendered = template.render(&sample_appointment());

    assert_eq!(
        rendered,
        "Hi Dana Alvarez, your 2019 Toyota Camry is booked for 2026-03-14 09:30."
    );
}

#[test]
fn test_render_leaves_unknown_placeholders() {
    let template = MessageTemplate::new("typo".to_string(), "Hi {custmer_name}!".to_string());

    assert_eq!(template.render(&sample_appointment()), "Hi {custmer_name}!");
}
