//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// dns-toggle: switch the host DNS resolver configuration
///
/// Toggles between DHCP-assigned DNS, the well-known resolver, and a
/// custom IPv4 resolver. Mutating commands require elevated privileges.
#[derive(Debug, Parser)]
#[command(name = "dns-toggle")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Timeout for external platform commands, in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Log what would be applied without touching the system
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for dns-toggle
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the current resolver mode
    Status {
        /// Print the mode as JSON
        #[arg(long)]
        json: bool,
    },

    /// Switch to DHCP-assigned (automatic) DNS
    Dhcp,

    /// Switch to a fixed resolver
    Fixed {
        /// IPv4 resolver address (defaults to the configured well-known
        /// resolver)
        address: Option<String>,
    },

    /// List network adapters and mark the active one (diagnostics)
    Adapters,

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "dns-toggle.toml")]
        output: PathBuf,
    },
}

impl Command {
    /// Returns true if the subcommand mutates resolver configuration and
    /// therefore needs elevated privileges.
    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        matches!(self, Self::Dhcp | Self::Fixed { .. })
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
