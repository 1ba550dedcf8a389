use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Polling constraints. Anything under the minimum hammers the API for no
// visible benefit; anything over an hour means the board is effectively stale.
pub const MIN_BOARD_REFRESH_SECS: u64 = 5;
pub const MAX_BOARD_REFRESH_SECS: u64 = 3600;
pub const DEFAULT_BOARD_REFRESH_SECS: u64 = 30;

pub const MIN_MESSAGE_POLL_SECS: u64 = 2;
pub const MAX_MESSAGE_POLL_SECS: u64 = 3600;
pub const DEFAULT_MESSAGE_POLL_SECS: u64 = 10;

/// Polling intervals for board refresh and message checks.
///
/// Every poller ties its interval to a shutdown subscription; these values
/// only control cadence, never lifetime.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Seconds between full board refreshes in watch mode
    pub board_refresh_secs: u64,
    /// Seconds between message polls on an open appointment
    pub message_poll_secs: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            board_refresh_secs: DEFAULT_BOARD_REFRESH_SECS,
            message_poll_secs: DEFAULT_MESSAGE_POLL_SECS,
        }
    }
}

impl PollingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.board_refresh_secs < MIN_BOARD_REFRESH_SECS
            || self.board_refresh_secs > MAX_BOARD_REFRESH_SECS
        {
            return Err(ConfigError::polling(format!(
                "polling.board_refresh_secs must be {}-{}, got {}",
                MIN_BOARD_REFRESH_SECS, MAX_BOARD_REFRESH_SECS, self.board_refresh_secs
            )));
        }

        if self.message_poll_secs < MIN_MESSAGE_POLL_SECS
            || self.message_poll_secs > MAX_MESSAGE_POLL_SECS
        {
            return Err(ConfigError::polling(format!(
                "polling.message_poll_secs must be {}-{}, got {}",
                MIN_MESSAGE_POLL_SECS, MAX_MESSAGE_POLL_SECS, self.message_poll_secs
            )));
        }

        Ok(())
    }
}
