use clap::Subcommand;

#[derive(Subcommand)]
pub enum VehicleCommands {
    /// Get a vehicle by ID
    Get {
        /// Vehicle ID (UUID)
        id: String,
    },

    /// Register a vehicle for a customer
    Create {
        /// Owning customer ID (UUID)
        #[arg(long)]
        customer_id: String,

        #[arg(long)]
        year: i32,

        #[arg(long)]
        make: String,

        #[arg(long)]
        model: String,

        #[arg(long)]
        license_plate: Option<String>,
    },

    /// Update a vehicle
    Update {
        /// Vehicle ID (UUID)
        id: String,

        #[arg(long)]
        year: Option<i32>,

        #[arg(long)]
        make: Option<String>,

        #[arg(long)]
        model: Option<String>,

        #[arg(long)]
        license_plate: Option<String>,
    },
}
