//! Tests for configuration files

use devtools_catalog::{AppConfig, Error, Profile, QueryPolicy};
use devtools_test_utils::{TestWorkspace, fixtures};

#[test]
fn test_load_production_config_with_relative_catalog() {
    let ws = TestWorkspace::new();
    let config_path = ws.write("config.toml", fixtures::PRODUCTION_CONFIG_TOML);
    ws.write("catalog.json", fixtures::EXTENDED_CATALOG_JSON);

    let config = AppConfig::load(&config_path).unwrap();
    assert_eq!(config.profile, Profile::Production);
    assert_eq!(config.base_path(), "/mydevToolsOL/");
    assert_eq!(config.query_policy, QueryPolicy::Trim);
    assert_eq!(config.indent, 4);
    assert_eq!(config.source.as_deref(), Some(config_path.as_path()));

    let catalog = config.load_catalog().unwrap();
    assert_eq!(catalog.len(), 4);
}

#[test]
fn test_resolve_explicit_missing_is_error() {
    let ws = TestWorkspace::new();
    let err = AppConfig::resolve(Some(&ws.path("nope.toml"))).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_invalid_config_reports_path() {
    let ws = TestWorkspace::new();
    let path = ws.write("config.toml", "query_policy = \"fuzzy\"");

    let err = AppConfig::load(&path).unwrap_err();
    assert!(std::error::Error::source(&err).is_some(), "TOML error should be chained");
    match err {
        Error::InvalidConfig { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn test_out_of_range_indent_reports_path() {
    let ws = TestWorkspace::new();
    let path = ws.write("config.toml", "indent = 40");

    let err = AppConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("indent must be between 1 and 16, got 40"));
    match err {
        Error::InvalidConfig { path: p, source, .. } => {
            assert_eq!(p, path);
            assert!(source.is_none());
        }
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}
