use crate::tests::{EnvGuard, setup_config_dir, write_config};
use crate::{CacheBackend, Config, ConfigError};

use roster_core::TokenPriority;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.cache.ttl_secs, eq(crate::DEFAULT_CACHE_TTL_SECS));
    assert_that!(config.cache.backend, eq(CacheBackend::Sqlite));
    assert_that!(
        config.pipeline.token_priority,
        eq(TokenPriority::StructuredFieldFirst)
    );
    assert_that!(config.identity.exclude_banned_users, eq(true));
    assert_that!(config.board.id, none());
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given - no credentials either
    let _temp = setup_config_dir();

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
    write_config(
        &temp,
        r#"
            [server]
            port = 9000

            [board]
            id = "board-123"
            token = "secret"

            [pipeline]
            token_priority = "description_first"
            identity_field_names = ["Roblox"]

            [cache]
            backend = "memory"
            ttl_secs = 60
            coalesce_misses = false
        "#,
    );

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.port, eq(9000));
    assert_that!(config.board.board_id(), some(eq("board-123")));
    assert_that!(
        config.pipeline.token_priority,
        eq(TokenPriority::DescriptionFirst)
    );
    assert_that!(
        config.pipeline.identity_field_names,
        eq(&vec![String::from("Roblox")])
    );
    assert_that!(config.cache.backend, eq(CacheBackend::Memory));
    assert_that!(config.cache.ttl_secs, eq(60));
    assert_that!(config.cache.coalesce_misses, eq(false));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[cache]\nttl_secs = 120");
    let _ttl = EnvGuard::set("ROSTER_CACHE_TTL_SECS", "600");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.cache.ttl_secs, eq(600));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _temp = setup_config_dir();
    let _id = EnvGuard::set("ROSTER_BOARD_ID", "b1");
    let _token = EnvGuard::set("ROSTER_BOARD_TOKEN", "t1");
    let _priority = EnvGuard::set("ROSTER_TOKEN_PRIORITY", "description_first");
    let _fields = EnvGuard::set("ROSTER_IDENTITY_FIELD_NAMES", "IGN, Roblox ,,");
    let _backend = EnvGuard::set("ROSTER_CACHE_BACKEND", "memory");
    let _coalesce = EnvGuard::set("ROSTER_CACHE_COALESCE", "0");
    let _colored = EnvGuard::set("ROSTER_LOG_COLORED", "false");

    // When
    let config = Config::load().unwrap();

    // Then
    let credentials = config.board.credentials().unwrap();
    assert_that!(credentials.board_id.as_str(), eq("b1"));
    assert_that!(credentials.token.as_str(), eq("t1"));
    assert_that!(
        config.pipeline.token_priority,
        eq(TokenPriority::DescriptionFirst)
    );
    assert_that!(
        config.pipeline.identity_field_names,
        eq(&vec![String::from("IGN"), String::from("Roblox")])
    );
    assert_that!(config.cache.backend, eq(CacheBackend::Memory));
    assert_that!(config.cache.coalesce_misses, eq(false));
    assert_that!(config.logging.colored, eq(false));
}

#[test]
#[serial]
fn given_unparseable_env_value_when_load_then_toml_value_kept() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[server]\nport = 9100");
    let _port = EnvGuard::set("ROSTER_SERVER_PORT", "not-a-port");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9100));
}

#[test]
#[serial]
fn given_invalid_log_level_when_load_then_defaults_to_info() {
    let _temp = setup_config_dir();
    let _level = EnvGuard::set("ROSTER_LOG_LEVEL", "loud");

    let config = Config::load().unwrap();

    assert_that!(*config.logging.level, eq(log::LevelFilter::Info));
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[server\nport = ");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    assert!(matches!(result, Err(ConfigError::Toml { .. })));
}

#[test]
#[serial]
fn given_config_dir_env_when_cache_path_then_joined_under_config_dir() {
    let (temp, _guard) = setup_config_dir();

    let config = Config::load().unwrap();
    let path = config.cache_path().unwrap();

    assert_that!(path, eq(&temp.path().join("cache.db")));
}
