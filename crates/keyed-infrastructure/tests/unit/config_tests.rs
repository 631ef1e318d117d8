//! Configuration Loader Tests

use keyed_infrastructure::config::{AppConfig, ConfigBuilder, ConfigLoader, ContainerConfig};
use keyed_infrastructure::constants::{DEFAULT_CONTAINER_PROVIDER, DEFAULT_LOG_LEVEL};
use tempfile::TempDir;

#[test]
fn test_app_config_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.container.provider, DEFAULT_CONTAINER_PROVIDER);
    assert!(!config.container.validate_on_build);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert!(!config.logging.json_format);
    assert!(config.logging.file_output.is_none());
}

#[test]
fn test_config_builder() {
    let config = ConfigBuilder::new()
        .with_provider("named")
        .with_validate_on_build(true)
        .build();

    assert_eq!(config.container.provider, "named");
    assert!(config.container.validate_on_build);
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config_path = temp_dir.path().join("keyed.toml");

    let original = ConfigBuilder::new()
        .with_container(ContainerConfig {
            provider: "type-keyed".to_string(),
            validate_on_build: true,
        })
        .build();

    let loader = ConfigLoader::new();
    loader.save_to_file(&original, &config_path).expect("save");

    let loaded = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .expect("load");

    assert_eq!(loaded, original);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config_path = temp_dir.path().join("keyed.toml");
    std::fs::write(&config_path, "[container]\nprovider = \"named\"\n").expect("write");

    let config = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .expect("load");

    assert_eq!(config.container.provider, "named");
    assert!(!config.container.validate_on_build);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().expect("temp dir");
    let loader = ConfigLoader::new().with_config_path(temp_dir.path().join("absent.toml"));

    let config = loader.load().expect("load");

    assert_eq!(config.container.provider, DEFAULT_CONTAINER_PROVIDER);
    assert!(loader.config_path().is_some());
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config_path = temp_dir.path().join("keyed.toml");
    std::fs::write(&config_path, "[logging]\nlevel = \"loud\"\n").expect("write");

    let result = ConfigLoader::new().with_config_path(&config_path).load();

    let err = result.err().expect("invalid level");
    assert!(err.to_string().contains("Invalid log level"));
}

#[test]
fn test_empty_provider_is_rejected() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config_path = temp_dir.path().join("keyed.toml");
    std::fs::write(&config_path, "[container]\nprovider = \"  \"\n").expect("write");

    let result = ConfigLoader::new().with_config_path(&config_path).load();

    assert!(result.is_err());
}

#[test]
fn test_malformed_file_reports_context() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config_path = temp_dir.path().join("keyed.toml");
    std::fs::write(&config_path, "[container]\nvalidate_on_build = \"sometimes\"\n").expect("write");

    let err = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .err()
        .expect("malformed");

    assert!(err.to_string().contains("Failed to extract configuration"));
}
