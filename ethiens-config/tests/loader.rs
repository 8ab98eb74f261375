use std::fs;
use std::time::Duration;

use ethiens_config::{ConfigLoadError, ConfigLoader, EnvConfig};
use tempfile::tempdir;

const SAMPLE: &str = r#"
[server]
host = "127.0.0.1"
port = 8088

[tmdb]
api_key = "file-key"
language = "en-US"
timeout = "3s"

[imdb]
base_url = "http://localhost:9999"

[cors]
allowed_origins = ["https://ethiens.fr"]
"#;

#[test]
fn explicit_file_is_loaded() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("ethiens.toml");
    fs::write(&path, SAMPLE).unwrap();

    let load = ConfigLoader::new()
        .with_config_path(&path)
        .load_from_env(EnvConfig::default(), false)
        .expect("config loads");
    let config = load.config;

    assert_eq!(config.bind_address(), "127.0.0.1:8088");
    assert!(config.providers.tmdb.is_configured());
    assert_eq!(config.providers.tmdb.language, "en-US");
    assert_eq!(config.providers.tmdb.timeout, Duration::from_secs(3));
    assert_eq!(
        config.providers.fallback.base_url.as_str(),
        "http://localhost:9999/"
    );
    assert_eq!(config.cors.allowed_origins, ["https://ethiens.fr"]);
    assert_eq!(config.metadata.config_path.as_deref(), Some(path.as_path()));
    assert!(load.warnings.is_empty());
}

#[test]
fn config_path_from_environment_is_used() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[server]\nport = 4000\n").unwrap();

    let env = EnvConfig {
        config_path: Some(path),
        ..EnvConfig::default()
    };
    let load = ConfigLoader::new().load_from_env(env, false).unwrap();

    assert_eq!(load.config.server.port, 4000);
    assert!(load.warnings.contains("TMDB_API_KEY"));
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let err = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .load_from_env(EnvConfig::default(), false)
        .unwrap_err();

    assert!(matches!(err, ConfigLoadError::MissingConfig { .. }));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("ethiens.toml");
    fs::write(&path, "[server\nport = ").unwrap();

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_from_env(EnvConfig::default(), false)
        .unwrap_err();

    assert!(matches!(err, ConfigLoadError::Parse { .. }));
}

#[test]
fn env_file_feeds_the_environment_layer() {
    let dir = tempdir().expect("tempdir");
    let env_path = dir.path().join(".env");
    fs::write(&env_path, "# local overrides\nIMDB_TIMEOUT=12s\n").unwrap();
    let config_path = dir.path().join("ethiens.toml");
    fs::write(&config_path, "").unwrap();

    let load = ConfigLoader::new()
        .with_env_file(&env_path)
        .with_config_path(&config_path)
        .load()
        .expect("config loads");

    assert!(load.config.metadata.env_file_loaded);
    assert_eq!(
        load.config.providers.fallback.timeout,
        Duration::from_secs(12)
    );
}

#[test]
fn absent_env_file_is_not_an_error() {
    let dir = tempdir().expect("tempdir");
    let config_path = dir.path().join("ethiens.toml");
    fs::write(&config_path, "").unwrap();

    let load = ConfigLoader::new()
        .with_env_file(dir.path().join("missing.env"))
        .with_config_path(&config_path)
        .load()
        .expect("config loads");

    assert!(!load.config.metadata.env_file_loaded);
}
