//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_pocketcalc_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains("pocketcalc") && path_str.ends_with("config.toml"),
            "Path should contain 'pocketcalc' and end with 'config.toml', got: {}",
            path_str
        );
    }
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("pocketcalc_test_config.toml");

    let toml_content = r#"
max_operand_length = 9
history_capacity = 20
log_file_path = "/tmp/pocketcalc-test.log"

[keybindings]
"p" = "percent"
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.max_operand_length, Some(9));
    assert_eq!(config.history_capacity, Some(20));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/pocketcalc-test.log"))
    );
    let bindings = config.keybindings.expect("keybindings table");
    assert_eq!(bindings.get("p").map(String::as_str), Some("percent"));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("pocketcalc_test_invalid.toml");

    fs::write(&config_path, "this is not valid TOML ][}{")
        .expect("Failed to write invalid test config");

    let result = load_config_file(&config_path);
    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        _ => panic!("Expected ParseError, got {:?}", result),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_fields() {
    let config_path = env::temp_dir().join("pocketcalc_test_unknown_field.toml");

    fs::write(&config_path, "theme = \"monokai\"\n").expect("Failed to write test config");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Unknown fields should be rejected, got {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_handles_partial_config() {
    let config_path = env::temp_dir().join("pocketcalc_test_partial.toml");

    fs::write(&config_path, "history_capacity = 3\n# Other fields omitted\n")
        .expect("Failed to write partial test config");

    let config = load_config_file(&config_path).unwrap().unwrap();
    assert_eq!(config.history_capacity, Some(3));
    assert_eq!(config.max_operand_length, None);
    assert_eq!(config.keybindings, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn merge_config_uses_defaults_when_none() {
    let resolved = merge_config(None);
    assert_eq!(resolved, ResolvedConfig::default());
    assert_eq!(resolved.max_operand_length, 12);
    assert_eq!(resolved.history_capacity, 5);
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        max_operand_length: Some(8),
        history_capacity: Some(10),
        log_file_path: None,
        keybindings: Some(HashMap::from([("p".to_string(), "percent".to_string())])),
    };

    let resolved = merge_config(Some(config_file));

    assert_eq!(resolved.max_operand_length, 8);
    assert_eq!(resolved.history_capacity, 10);
    assert_eq!(resolved.log_file_path, default_log_path());
    assert_eq!(resolved.keybindings.len(), 1);
}

#[test]
fn validate_rejects_zero_limits() {
    let config = ResolvedConfig {
        history_capacity: 0,
        ..ResolvedConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue {
            field: "history_capacity",
            ..
        })
    ));

    let config = ResolvedConfig {
        max_operand_length: 0,
        ..ResolvedConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue {
            field: "max_operand_length",
            ..
        })
    ));
}

#[test]
fn validate_accepts_defaults() {
    assert_eq!(ResolvedConfig::default().validate(), Ok(()));
}

#[test]
fn engine_config_carries_limits() {
    let config = ResolvedConfig {
        max_operand_length: 4,
        history_capacity: 2,
        ..ResolvedConfig::default()
    };
    let engine = config.engine_config();
    assert_eq!(engine.max_operand_length, 4);
    assert_eq!(engine.history_capacity, 2);
}

#[test]
fn key_bindings_reject_unknown_action() {
    let config = ResolvedConfig {
        keybindings: HashMap::from([("p".to_string(), "teleport".to_string())]),
        ..ResolvedConfig::default()
    };
    assert!(matches!(
        config.key_bindings(),
        Err(ConfigError::InvalidBinding { .. })
    ));
}

#[test]
fn apply_cli_overrides_only_touches_given_values() {
    let base = ResolvedConfig::default();
    let result = apply_cli_overrides(base.clone(), None, None);
    assert_eq!(result, base);

    let result = apply_cli_overrides(base, Some(9), None);
    assert_eq!(result.history_capacity, 9);
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
/// Removes the var on drop, preventing test pollution in parallel execution.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(pocketcalc_history_env)]
fn apply_env_overrides_respects_history_capacity() {
    let _guard = EnvGuard::new(HISTORY_CAPACITY_ENV_VAR);

    env::set_var(HISTORY_CAPACITY_ENV_VAR, "7");
    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.history_capacity, 7);
}

#[test]
#[serial(pocketcalc_history_env)]
fn apply_env_overrides_ignores_unparsable_value() {
    let _guard = EnvGuard::new(HISTORY_CAPACITY_ENV_VAR);

    env::set_var(HISTORY_CAPACITY_ENV_VAR, "lots");
    let base = ResolvedConfig::default();
    let result = apply_env_overrides(base.clone());

    assert_eq!(result, base);
}

#[test]
#[serial(pocketcalc_history_env)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(HISTORY_CAPACITY_ENV_VAR);

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(pocketcalc_config_env)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let temp_dir = env::temp_dir();
    let explicit_path = temp_dir.join("pocketcalc_explicit.toml");
    fs::write(&explicit_path, "history_capacity = 11\n").expect("Failed to write explicit config");

    let env_path = temp_dir.join("pocketcalc_env.toml");
    fs::write(&env_path, "history_capacity = 22\n").expect("Failed to write env config");
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let config = load_config_with_precedence(Some(explicit_path.clone()))
        .unwrap()
        .unwrap();
    assert_eq!(
        config.history_capacity,
        Some(11),
        "Should use explicit path, not POCKETCALC_CONFIG env var"
    );

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(pocketcalc_config_env)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let env_path = env::temp_dir().join("pocketcalc_env_only.toml");
    fs::write(&env_path, "max_operand_length = 6\n").expect("Failed to write env config");
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let config = load_config_with_precedence(None).unwrap().unwrap();
    assert_eq!(config.max_operand_length, Some(6));

    fs::remove_file(env_path).ok();
}

#[test]
fn full_precedence_chain_cli_wins() {
    let config_file = ConfigFile {
        history_capacity: Some(3),
        ..ConfigFile::default()
    };
    let merged = merge_config(Some(config_file));
    assert_eq!(merged.history_capacity, 3, "Config file should override default");

    let with_cli = apply_cli_overrides(merged, Some(8), None);
    assert_eq!(
        with_cli.history_capacity, 8,
        "CLI value should override all other sources"
    );
}
