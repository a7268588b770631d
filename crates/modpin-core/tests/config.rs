use std::path::PathBuf;

use modpin_core::config::{ModpinConfig, RegistrySource, CONFIG_FILE_NAME};
use modpin_util::errors::ModpinError;
use tempfile::TempDir;

#[test]
fn test_config_default_has_no_registry() {
    let config = ModpinConfig::default();
    assert!(config.registry.is_none());
}

#[test]
fn test_config_default_timeout() {
    let config = ModpinConfig::default();
    assert_eq!(config.network.timeout_secs, 30);
}

#[test]
fn test_config_defaults_apply_from_empty_toml() {
    let config: ModpinConfig = toml::from_str("").unwrap();
    assert!(config.registry.is_none());
    assert_eq!(config.network.timeout_secs, 30);
    assert!(config.network.user_agent.starts_with("modpin/"));
}

#[test]
fn test_config_parses_all_fields() {
    let config: ModpinConfig = toml::from_str(
        r#"
registry = "https://example.com/registry.json"

[network]
timeout-secs = 5
user-agent = "ci-bot"
"#,
    )
    .unwrap();
    assert_eq!(
        config.registry.as_deref(),
        Some("https://example.com/registry.json")
    );
    assert_eq!(config.network.timeout_secs, 5);
    assert_eq!(config.network.user_agent, "ci-bot");
}

#[test]
fn test_discover_walks_up() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join(CONFIG_FILE_NAME),
        "registry = \"registry.json\"\n",
    )
    .unwrap();
    let nested = tmp.path().join("sub").join("dir");
    std::fs::create_dir_all(&nested).unwrap();

    let config = ModpinConfig::discover(&nested).unwrap();
    assert_eq!(config.registry.as_deref(), Some("registry.json"));
}

#[test]
fn test_from_path_rejects_bad_toml() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "registry = [").unwrap();

    let err = ModpinConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, ModpinError::Config { .. }), "got: {err:?}");
}

#[test]
fn test_from_path_missing_file() {
    let tmp = TempDir::new().unwrap();
    let err = ModpinConfig::from_path(&tmp.path().join("nope.toml")).unwrap_err();
    assert!(err.to_string().contains("nope.toml"), "got: {err}");
}

#[test]
fn test_registry_source_classifies_urls() {
    assert_eq!(
        RegistrySource::parse("https://example.com/r.json"),
        RegistrySource::Url("https://example.com/r.json".to_string())
    );
    assert_eq!(
        RegistrySource::parse("HTTP://example.com/r.json"),
        RegistrySource::Url("HTTP://example.com/r.json".to_string())
    );
}

#[test]
fn test_registry_source_classifies_paths() {
    assert_eq!(
        RegistrySource::parse("registry.json"),
        RegistrySource::File(PathBuf::from("registry.json"))
    );
    assert_eq!(
        RegistrySource::parse("./http/registry.json"),
        RegistrySource::File(PathBuf::from("./http/registry.json"))
    );
}
