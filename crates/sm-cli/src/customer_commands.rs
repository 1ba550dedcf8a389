use clap::Subcommand;

#[derive(Subcommand)]
pub enum CustomerCommands {
    /// List all customers
    List,

    /// Get a customer by ID
    Get {
        /// Customer ID (UUID)
        id: String,
    },

    /// Create a new customer
    Create {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        email: Option<String>,
    },

    /// Update a customer
    Update {
        /// Customer ID (UUID)
        id: String,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Show a customer's visit history
    History {
        /// Customer ID (UUID)
        id: String,
    },
}
