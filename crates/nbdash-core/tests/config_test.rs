use std::str::FromStr;

use nbdash_core::{DashboardMode, NbdashConfig};
use tempfile::TempDir;

#[test]
fn load_returns_defaults_when_no_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = NbdashConfig::load(tmp.path()).unwrap();

    assert_eq!(config.image.base_image, "nbdash");
    assert_eq!(config.docker.program, "docker");
    assert!(config.metadata.maintainer.is_none());
}

#[test]
fn load_parses_full_config() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[image]
base_image = "nbdash-gpu"

[docker]
program = "podman"

[metadata]
maintainer = "data-team@example.com"
"#;
    std::fs::write(tmp.path().join("nbdash.toml"), toml).unwrap();

    let config = NbdashConfig::load(tmp.path()).unwrap();

    assert_eq!(config.image.base_image, "nbdash-gpu");
    assert_eq!(config.docker.program, "podman");
    assert_eq!(
        config.metadata.maintainer.as_deref(),
        Some("data-team@example.com")
    );
}

#[test]
fn load_partial_config_fills_defaults() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[docker]
program = "podman"
"#;
    std::fs::write(tmp.path().join("nbdash.toml"), toml).unwrap();

    let config = NbdashConfig::load(tmp.path()).unwrap();

    assert_eq!(config.docker.program, "podman");
    // Defaults preserved
    assert_eq!(config.image.base_image, "nbdash");
    assert!(config.metadata.maintainer.is_none());
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("nbdash.toml"), "not valid {{{{ toml").unwrap();

    let result = NbdashConfig::load(tmp.path());
    assert!(result.is_err());

    let err = result.unwrap_err().to_string();
    assert!(err.contains("parse"));
}

#[test]
fn load_empty_config_returns_defaults() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("nbdash.toml"), "").unwrap();

    let config = NbdashConfig::load(tmp.path()).unwrap();
    assert_eq!(config.image.base_image, "nbdash");
}

// ── Dashboard mode ──

#[test]
fn mode_parses_known_names() {
    assert_eq!(
        DashboardMode::from_str("voila").unwrap(),
        DashboardMode::Voila
    );
    assert_eq!(
        DashboardMode::from_str("nbparameterise").unwrap(),
        DashboardMode::Nbparameterise
    );
}

#[test]
fn mode_rejects_unknown_name() {
    let err = DashboardMode::from_str("panel").unwrap_err();
    assert!(err.to_string().contains("unknown dashboard mode 'panel'"));
}

#[test]
fn mode_display_round_trips() {
    for mode in [DashboardMode::Voila, DashboardMode::Nbparameterise] {
        assert_eq!(DashboardMode::from_str(&mode.to_string()).unwrap(), mode);
    }
}
