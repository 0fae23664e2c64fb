//! Tests for loading play configuration from TOML.

use std::io::Write;
use supertoe::{ConfigOverrides, PlayConfig, PlayerKind};
use supertoe_core::{Mark, Variant};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_full_config_file() {
    let file = write_config(
        r#"
game = "super"
time_budget_ms = 250
seed = 42

[players]
x = "peek-ahead"
o = "random"
"#,
    );
    let config = PlayConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.game(), Variant::Super);
    assert_eq!(*config.time_budget_ms(), 250);
    assert_eq!(*config.seed(), Some(42));
    assert_eq!(config.players().for_mark(Mark::X), PlayerKind::PeekAhead);
    assert_eq!(config.players().for_mark(Mark::O), PlayerKind::Random);
}

#[test]
fn test_partial_config_uses_defaults() {
    let file = write_config("[players]\no = \"random\"\n");
    let config = PlayConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.game(), Variant::Classic);
    assert_eq!(*config.time_budget_ms(), 3000);
    assert_eq!(*config.players().x(), PlayerKind::Human);
    assert_eq!(*config.players().o(), PlayerKind::Random);
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = PlayConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, PlayConfig::default());
}

#[test]
fn test_bad_toml_is_config_error() {
    let file = write_config("game = \"hexagonal\"\n");
    let err = PlayConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_cli_overrides_file() {
    let file = write_config("game = \"super\"\ntime_budget_ms = 100\n");
    let config = PlayConfig::load(file.path())
        .unwrap()
        .with_overrides(ConfigOverrides {
            time_budget_ms: Some(20),
            x: Some(PlayerKind::Flawless),
            ..Default::default()
        });
    assert_eq!(*config.game(), Variant::Super);
    assert_eq!(config.time_budget(), std::time::Duration::from_millis(20));
    assert_eq!(*config.players().x(), PlayerKind::Flawless);
}
