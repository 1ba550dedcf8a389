mod appointment_dto;
mod appointment_status;
mod message;
mod message_template;
