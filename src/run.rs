//! Subcommand execution.
//!
//! Thin presentation layer over the core: reads state through
//! [`DnsReader`], applies transitions through [`DnsWriter`], and renders
//! results. All calls are synchronous; one process runs one operation.

use std::process::ExitCode;

use dns_toggle::config::{Command, ValidatedConfig};
use dns_toggle::dns::{DnsMode, DnsReader, DnsWriter};
use dns_toggle::network::platform::NativeCommands;
use dns_toggle::network::{CommandRunner, PlatformCommands, first_enabled};
use dns_toggle::privilege;

use crate::app::exit_code;

/// Builds the platform commands for the build target.
#[cfg(unix)]
fn native_commands(config: &ValidatedConfig) -> NativeCommands {
    let mut commands = NativeCommands::new(CommandRunner::new(config.command_timeout));
    if let (Some(resolv_conf), Some(backup)) = (&config.resolv_conf, &config.backup) {
        commands = commands.with_resolver_paths(resolv_conf, backup);
    }
    commands
}

#[cfg(windows)]
fn native_commands(config: &ValidatedConfig) -> NativeCommands {
    NativeCommands::new(CommandRunner::new(config.command_timeout))
}

#[cfg(not(any(unix, windows)))]
fn native_commands(_config: &ValidatedConfig) -> NativeCommands {
    NativeCommands
}

/// Executes the given subcommand.
pub fn execute(command: &Command, config: &ValidatedConfig) -> ExitCode {
    // Advisory pre-flight: mutating commands need elevation unless they
    // only describe what they would do.
    if command.is_mutating() && !config.dry_run && !privilege::is_elevated() {
        eprintln!(
            "Changing resolver configuration requires elevated privileges.\n\
             Re-run as root/Administrator, or use --dry-run."
        );
        return exit_code::runtime_error();
    }

    let commands = native_commands(config);

    match command {
        Command::Status { json } => status(&commands, *json),
        Command::Dhcp => apply(&commands, config, &DnsMode::Automatic),
        Command::Fixed { address } => {
            let address = address
                .clone()
                .unwrap_or_else(|| config.well_known.to_string());
            apply(&commands, config, &DnsMode::FixedResolver(address))
        }
        Command::Adapters => adapters(&commands),
        // Handled in main before configuration is loaded.
        Command::Init { .. } => exit_code::SUCCESS,
    }
}

/// Reads and displays the current resolver mode; never fails.
fn status<C: PlatformCommands>(commands: &C, json: bool) -> ExitCode {
    let mode = DnsReader::new(commands).read();

    if json {
        match serde_json::to_string_pretty(&mode) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => {
                eprintln!("Failed to render JSON: {err}");
                return exit_code::runtime_error();
            }
        }
    } else {
        println!("Current DNS: {mode}");
    }
    exit_code::SUCCESS
}

/// Applies a resolver mode transition and confirms it with a re-read.
fn apply<C: PlatformCommands>(
    commands: &C,
    config: &ValidatedConfig,
    requested: &DnsMode,
) -> ExitCode {
    if config.dry_run {
        println!("dry-run: would apply {requested}");
        return exit_code::SUCCESS;
    }

    let result = DnsWriter::new(commands).apply(requested);
    println!("{result}");
    if !result.success {
        return exit_code::runtime_error();
    }

    // Confirm: re-read the state after a successful apply.
    let confirmed = DnsReader::new(commands).read();
    println!("Current DNS: {confirmed}");
    exit_code::SUCCESS
}

/// Lists adapters with the active one marked (diagnostics).
fn adapters<C: PlatformCommands>(commands: &C) -> ExitCode {
    let listed = match commands.list_adapters() {
        Ok(listed) => listed,
        Err(err) => {
            eprintln!("Failed to list adapters: {err}");
            return exit_code::runtime_error();
        }
    };

    let active = first_enabled(&listed).cloned();
    if listed.is_empty() {
        println!("No network adapters found.");
    }
    for adapter in &listed {
        let marker = if Some(adapter) == active.as_ref() {
            " *active*"
        } else {
            ""
        };
        println!("{adapter}{marker}");
    }
    exit_code::SUCCESS
}
