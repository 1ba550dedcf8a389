//! sm-cli library
//!
//! Exposes the command tree, error type and logger so the `sm` binary and
//! the tests share one definition.

pub mod appointment_commands;
pub mod board_commands;
pub mod cli;
pub mod commands;
pub mod customer_commands;
pub mod error;
pub mod export_commands;
pub mod logger;
pub mod message_commands;
pub mod service_commands;
pub mod template_commands;
pub mod vehicle_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, CliResult};
