//! Tests for configuration merging and validation.

use std::time::Duration;

use super::cli::Cli;
use super::error::ConfigError;
use super::toml::TomlConfig;
use super::validated::ValidatedConfig;

fn cli(args: &[&str]) -> Cli {
    Cli::parse_from_iter(std::iter::once("dns-toggle").chain(args.iter().copied()))
}

#[test]
fn defaults_apply_without_any_config() {
    let config = ValidatedConfig::from_raw(&cli(&["status"]), None).unwrap();

    assert_eq!(config.well_known.to_string(), "1.1.1.1");
    assert_eq!(config.command_timeout, Duration::from_secs(10));
    assert!(config.resolv_conf.is_none());
    assert!(!config.dry_run);
}

#[test]
fn toml_overrides_defaults() {
    let toml = TomlConfig::parse(
        "[resolver]\nwell_known = \"9.9.9.9\"\n[command]\ntimeout_secs = 30\n",
    )
    .unwrap();

    let config = ValidatedConfig::from_raw(&cli(&["status"]), Some(&toml)).unwrap();
    assert_eq!(config.well_known.to_string(), "9.9.9.9");
    assert_eq!(config.command_timeout, Duration::from_secs(30));
}

#[test]
fn cli_timeout_beats_toml() {
    let toml = TomlConfig::parse("[command]\ntimeout_secs = 30\n").unwrap();

    let config =
        ValidatedConfig::from_raw(&cli(&["status", "--timeout", "7"]), Some(&toml)).unwrap();
    assert_eq!(config.command_timeout, Duration::from_secs(7));
}

#[test]
fn invalid_well_known_address_is_rejected() {
    let toml = TomlConfig::parse("[resolver]\nwell_known = \"not-an-ip\"\n").unwrap();

    let err = ValidatedConfig::from_raw(&cli(&["status"]), Some(&toml)).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidAddress { .. }));
}

#[test]
fn zero_timeout_is_rejected() {
    let err = ValidatedConfig::from_raw(&cli(&["status", "--timeout", "0"]), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidDuration { .. }));
}

#[test]
fn absurd_timeout_is_rejected() {
    let err =
        ValidatedConfig::from_raw(&cli(&["status", "--timeout", "100000"]), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidDuration { .. }));
}

#[test]
fn posix_path_overrides_pass_through() {
    let toml =
        TomlConfig::parse("[posix]\nresolv_conf = \"/tmp/r.conf\"\nbackup = \"/tmp/r.bak\"\n")
            .unwrap();

    let config = ValidatedConfig::from_raw(&cli(&["status"]), Some(&toml)).unwrap();
    assert_eq!(
        config.resolv_conf.as_deref(),
        Some(std::path::Path::new("/tmp/r.conf"))
    );
    assert_eq!(
        config.backup.as_deref(),
        Some(std::path::Path::new("/tmp/r.bak"))
    );
}

#[test]
fn dry_run_and_verbose_come_from_the_cli() {
    let config =
        ValidatedConfig::from_raw(&cli(&["dhcp", "--dry-run", "--verbose"]), None).unwrap();
    assert!(config.dry_run);
    assert!(config.verbose);
}
