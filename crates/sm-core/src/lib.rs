pub mod error;
pub mod export;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use export::csv::{AppointmentField, appointment_rows, write_csv};
pub use export::export_data::ExportData;
pub use models::appointment::Appointment;
pub use models::appointment_dto::AppointmentDto;
pub use models::appointment_status::{ALL_STATUSES, AppointmentStatus};
pub use models::customer::Customer;
pub use models::customer_dto::CustomerDto;
pub use models::history_entry::HistoryEntry;
pub use models::history_entry_dto::HistoryEntryDto;
pub use models::message::{Message, MessageDirection};
pub use models::message_dto::MessageDto;
pub use models::message_template::MessageTemplate;
pub use models::message_template_dto::MessageTemplateDto;
pub use models::service_line::ServiceLine;
pub use models::service_line_dto::ServiceLineDto;
pub use models::vehicle::Vehicle;
pub use models::vehicle_dto::VehicleDto;
