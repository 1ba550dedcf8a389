use crate::{
    ApiConfig, ConfigError, ConfigErrorResult, LoggingConfig, PollingConfig, RetryConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
    pub polling: PollingConfig,
    pub retry: RetryConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for SM_CONFIG_DIR env var, else use ./.sm/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SM_* environment variable overrides
    /// 5. Check for legacy ~/.sm/config.toml and warn
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        // Early releases read a global ~/.sm/config.toml; it is ignored now
        if let Some(home) = dirs::home_dir() {
            let legacy = home.join(".sm").join("config.toml");
            if legacy.exists() && legacy != config_path {
                log::warn!(
                    "Ignoring legacy config at {} (use ./.sm/config.toml or SM_CONFIG_DIR)",
                    legacy.display()
                );
            }
        }

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SM_CONFIG_DIR env var > ./.sm/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("SM_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".sm"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.polling.validate()?;
        self.retry.validate()?;

        Ok(())
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {}s)",
            self.api.base_url, self.api.request_timeout_secs
        );

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );

        info!(
            "  polling: board={}s, messages={}s",
            self.polling.board_refresh_secs, self.polling.message_poll_secs
        );

        info!(
            "  retry: attempts={}, initial={}ms, max={}s, backoff={}x",
            self.retry.max_attempts,
            self.retry.initial_delay_ms,
            self.retry.max_delay_secs,
            self.retry.backoff_multiplier
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("SM_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse(
            "SM_API_REQUEST_TIMEOUT_SECS",
            &mut self.api.request_timeout_secs,
        );

        // Logging
        Self::apply_env_parse("SM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SM_LOG_FILE", &mut self.logging.file);

        // Polling
        Self::apply_env_parse(
            "SM_POLL_BOARD_REFRESH_SECS",
            &mut self.polling.board_refresh_secs,
        );
        Self::apply_env_parse(
            "SM_POLL_MESSAGE_POLL_SECS",
            &mut self.polling.message_poll_secs,
        );

        // Retry
        Self::apply_env_parse("SM_RETRY_MAX_ATTEMPTS", &mut self.retry.max_attempts);
        Self::apply_env_parse(
            "SM_RETRY_INITIAL_DELAY_MS",
            &mut self.retry.initial_delay_ms,
        );
        Self::apply_env_parse("SM_RETRY_MAX_DELAY_SECS", &mut self.retry.max_delay_secs);
        Self::apply_env_parse(
            "SM_RETRY_BACKOFF_MULTIPLIER",
            &mut self.retry.backoff_multiplier,
        );
        Self::apply_env_bool("SM_RETRY_JITTER", &mut self.retry.jitter);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
