use clap::Subcommand;

#[derive(Subcommand)]
pub enum BoardCommands {
    /// Print the board: columns with their ordered cards
    Show {
        /// Restrict to one technician's bays (UUID)
        #[arg(long)]
        technician_id: Option<String>,
    },

    /// Keep the board cached and refreshed until Ctrl-C; prints a column
    /// summary on every refresh interval
    Watch {
        /// Restrict to one technician's bays (UUID)
        #[arg(long)]
        technician_id: Option<String>,
    },
}
