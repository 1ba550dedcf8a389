use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.api.base_url.as_str(), eq(crate::DEFAULT_BASE_URL));
    assert_that!(
        config.polling.board_refresh_secs,
        eq(crate::polling_config::DEFAULT_BOARD_REFRESH_SECS)
    );
    assert_that!(
        config.polling.message_poll_secs,
        eq(crate::polling_config::DEFAULT_MESSAGE_POLL_SECS)
    );
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_ok_and_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [api]
              base_url = "http://10.0.0.5:9000"

              [polling]
              board_refresh_secs = 60
          "#,
    )
    .unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.api.base_url.as_str(), eq("http://10.0.0.5:9000"));
    assert_that!(config.polling.board_refresh_secs, eq(60));
    // Unmentioned sections keep their defaults
    assert_that!(
        config.polling.message_poll_secs,
        eq(crate::polling_config::DEFAULT_MESSAGE_POLL_SECS)
    );
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [api]
              base_url = "http://10.0.0.5:9000"
          "#,
    )
    .unwrap();
    let _env = EnvGuard::set("SM_API_BASE_URL", "http://127.0.0.1:8111");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("http://127.0.0.1:8111"));
}

#[test]
#[serial]
fn given_env_poll_override_when_load_then_parsed() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _env = EnvGuard::set("SM_POLL_BOARD_REFRESH_SECS", "45");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.polling.board_refresh_secs, eq(45));
}

// =========================================================================
// Error Path Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "api = not valid toml [").unwrap();

    // When
    let result = Config::load();

    // Then
    assert!(matches!(result, Err(crate::ConfigError::Toml { .. })));
}

#[test]
#[serial]
fn given_unparseable_env_override_when_load_then_default_kept() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _env = EnvGuard::set("SM_POLL_BOARD_REFRESH_SECS", "not-a-number");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.polling.board_refresh_secs,
        eq(crate::polling_config::DEFAULT_BOARD_REFRESH_SECS)
    );
}
