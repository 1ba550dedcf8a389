use clap::Subcommand;

#[derive(Subcommand)]
pub enum ServiceCommands {
    /// Add a service line to an appointment
    Add {
        /// Appointment ID (UUID)
        appointment_id: String,

        /// Service name, e.g. "Oil change"
        #[arg(long)]
        name: String,

        /// Price in cents
        #[arg(long)]
        price_cents: i64,
    },

    /// Update a service line
    Update {
        /// Service line ID (UUID)
        id: String,

        /// New service name
        #[arg(long)]
        name: Option<String>,

        /// New price in cents
        #[arg(long)]
        price_cents: Option<i64>,
    },

    /// Delete a service line
    Delete {
        /// Service line ID (UUID)
        id: String,
    },
}
