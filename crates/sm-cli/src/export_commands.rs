use clap::Subcommand;

#[derive(Subcommand)]
pub enum ExportCommands {
    /// Flatten visible appointments to CSV or JSON
    Appointments {
        /// Comma-separated field list
        /// (customer_name, vehicle_info, service, status, position, start_time, total)
        #[arg(long, default_value = "customer_name,vehicle_info,service,status")]
        fields: String,

        /// Output format
        #[arg(long, value_parser = ["csv", "json"], default_value = "csv")]
        format: String,

        /// Output file ("-" = stdout)
        #[arg(long, default_value = "-")]
        output: String,

        /// Restrict to one technician's bays (UUID)
        #[arg(long)]
        technician_id: Option<String>,
    },

    /// Full JSON dump: appointments, customers, vehicles and messages
    All {
        /// Output file ("-" = stdout)
        #[arg(long, default_value = "-")]
        output: String,
    },
}
