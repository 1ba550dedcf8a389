mod store;

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use sm_core::{Appointment, AppointmentStatus};

pub(crate) fn appointment(customer: &str, status: AppointmentStatus, position: i32) -> Appointment {
    appointment_with_id(Uuid::new_v4(), customer, status, position)
}

pub(crate) fn appointment_with_id(
    id: Uuid,
    customer: &str,
    status: AppointmentStatus,
    position: i32,
) -> Appointment {
    let mut appointment = Appointment::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        customer.to_string(),
        "2015 Honda Civic".to_string(),
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap(),
    );
    appointment.id = id;
    appointment.status = status;
    appointment.position = position;
    appointment.service_summary = "Oil change".to_string();
    appointment.total_cents = 4999;
    appointment
}
