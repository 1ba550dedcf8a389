use clap::Subcommand;

#[derive(Subcommand)]
pub enum AppointmentCommands {
    /// Get an appointment by ID
    Get {
        /// Appointment ID (UUID)
        id: String,
    },

    /// Move an appointment to a new status column/position on the board.
    /// The move is applied optimistically and settled against the server.
    Move {
        /// Appointment ID (UUID)
        id: String,

        /// Target status column
        #[arg(long, value_parser = ["scheduled", "in_progress", "ready", "completed", "no_show", "canceled"])]
        status: String,

        /// Target position within the column (0-based; clamped)
        #[arg(long, default_value_t = 0)]
        position: i32,

        /// Restrict the board view to one technician (UUID)
        #[arg(long)]
        technician_id: Option<String>,
    },

    /// Update appointment fields
    Update {
        /// Appointment ID (UUID)
        id: String,

        /// New notes
        #[arg(long)]
        notes: Option<String>,

        /// Assigned technician ID (UUID)
        #[arg(long)]
        technician_id: Option<String>,

        /// New start time (epoch seconds)
        #[arg(long)]
        start_time: Option<i64>,

        /// Expected version (required for optimistic locking)
        #[arg(long)]
        version: i32,
    },

    /// Delete an appointment
    Delete {
        /// Appointment ID (UUID)
        id: String,
    },
}
