use crate::{
    appointment_commands::AppointmentCommands, board_commands::BoardCommands,
    customer_commands::CustomerCommands, export_commands::ExportCommands,
    message_commands::MessageCommands, service_commands::ServiceCommands,
    template_commands::TemplateCommands, vehicle_commands::VehicleCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Appointment operations
    Appointment {
        #[command(subcommand)]
        action: AppointmentCommands,
    },

    /// Status board operations
    Board {
        #[command(subcommand)]
        action: BoardCommands,
    },

    /// Service line operations
    Service {
        #[command(subcommand)]
        action: ServiceCommands,
    },

    /// Customer messaging operations
    Message {
        #[command(subcommand)]
        action: MessageCommands,
    },

    /// Customer operations
    Customer {
        #[command(subcommand)]
        action: CustomerCommands,
    },

    /// Vehicle operations
    Vehicle {
        #[command(subcommand)]
        action: VehicleCommands,
    },

    /// Message template operations
    Template {
        #[command(subcommand)]
        action: TemplateCommands,
    },

    /// Export visible records
    Export {
        #[command(subcommand)]
        action: ExportCommands,
    },
}
