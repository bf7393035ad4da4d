//! Tests for CLI argument parsing.

use super::cli::{Cli, Command};

fn parse(args: &[&str]) -> Cli {
    Cli::parse_from_iter(std::iter::once("dns-toggle").chain(args.iter().copied()))
}

#[test]
fn status_parses_with_json_flag() {
    let cli = parse(&["status", "--json"]);
    assert!(matches!(cli.command, Command::Status { json: true }));

    let cli = parse(&["status"]);
    assert!(matches!(cli.command, Command::Status { json: false }));
}

#[test]
fn dhcp_and_fixed_are_mutating() {
    assert!(parse(&["dhcp"]).command.is_mutating());
    assert!(parse(&["fixed"]).command.is_mutating());
    assert!(!parse(&["status"]).command.is_mutating());
    assert!(!parse(&["adapters"]).command.is_mutating());
    assert!(!parse(&["init"]).command.is_mutating());
}

#[test]
fn fixed_takes_an_optional_address() {
    let cli = parse(&["fixed", "8.8.8.8"]);
    match cli.command {
        Command::Fixed { address } => assert_eq!(address.as_deref(), Some("8.8.8.8")),
        other => panic!("expected Fixed, got {other:?}"),
    }

    let cli = parse(&["fixed"]);
    assert!(matches!(cli.command, Command::Fixed { address: None }));
}

#[test]
fn global_flags_apply_after_the_subcommand() {
    let cli = parse(&["dhcp", "--dry-run", "--verbose", "--timeout", "3"]);
    assert!(cli.dry_run);
    assert!(cli.verbose);
    assert_eq!(cli.timeout, Some(3));
}

#[test]
fn config_path_is_optional() {
    let cli = parse(&["status", "--config", "/etc/dns-toggle.toml"]);
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/etc/dns-toggle.toml"))
    );

    assert!(parse(&["status"]).config.is_none());
}

#[test]
fn init_defaults_its_output_path() {
    let cli = parse(&["init"]);
    match cli.command {
        Command::Init { output } => {
            assert_eq!(output, std::path::PathBuf::from("dns-toggle.toml"));
        }
        other => panic!("expected Init, got {other:?}"),
    }
}
