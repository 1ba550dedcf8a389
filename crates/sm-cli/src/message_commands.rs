use clap::Subcommand;

#[derive(Subcommand)]
pub enum MessageCommands {
    /// List messages on an appointment
    List {
        /// Appointment ID (UUID)
        appointment_id: String,
    },

    /// Send an outbound message on an appointment
    Send {
        /// Appointment ID (UUID)
        appointment_id: String,

        /// Message body (mutually exclusive with --template)
        #[arg(long, conflicts_with = "template")]
        body: Option<String>,

        /// Name of a message template to render and send
        #[arg(long, conflicts_with = "body")]
        template: Option<String>,
    },

    /// Delete a message
    Delete {
        /// Message ID (UUID)
        id: String,
    },

    /// Poll for new messages on an appointment until Ctrl-C
    Watch {
        /// Appointment ID (UUID)
        appointment_id: String,
    },
}
