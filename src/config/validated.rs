//! Validated configuration after merging CLI and TOML sources.
//!
//! All validation happens during construction, so the rest of the
//! application never sees a half-checked value.

use std::fmt;
use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::time::Duration;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Upper bound on the command timeout; anything longer is a typo.
const MAX_TIMEOUT_SECS: u64 = 300;

/// Fully validated configuration ready for use by the application.
///
/// # Priority
///
/// CLI arguments over TOML config values over built-in defaults.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Fixed resolver applied when no address is given on the command line
    pub well_known: Ipv4Addr,

    /// Timeout for external platform commands
    pub command_timeout: Duration,

    /// POSIX live resolver file override (`None` = platform default)
    pub resolv_conf: Option<PathBuf>,

    /// POSIX backup file override (`None` = platform default)
    pub backup: Option<PathBuf>,

    /// Log what would be applied without touching the system
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ well_known: {}, timeout: {}s, dry_run: {} }}",
            self.well_known,
            self.command_timeout.as_secs(),
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Loads and merges configuration from the CLI and its optional config
    /// file.
    ///
    /// # Errors
    ///
    /// Returns an error when the config file cannot be loaded or any merged
    /// value fails validation.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = cli
            .config
            .as_deref()
            .map(TomlConfig::load)
            .transpose()?;
        Self::from_raw(cli, toml.as_ref())
    }

    /// Creates a validated configuration from CLI arguments and an optional
    /// parsed TOML config.
    ///
    /// # Errors
    ///
    /// Returns an error when the well-known resolver is not an IPv4 literal
    /// or the command timeout is zero/out of range.
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let well_known = Self::resolve_well_known(toml)?;
        let command_timeout = Self::resolve_timeout(cli, toml)?;

        let posix = toml.map(|t| &t.posix);
        Ok(Self {
            well_known,
            command_timeout,
            resolv_conf: posix.and_then(|p| p.resolv_conf.clone()),
            backup: posix.and_then(|p| p.backup.clone()),
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    fn resolve_well_known(toml: Option<&TomlConfig>) -> Result<Ipv4Addr, ConfigError> {
        let value = toml
            .and_then(|t| t.resolver.well_known.as_deref())
            .unwrap_or(defaults::WELL_KNOWN_RESOLVER);
        value.parse().map_err(|_| ConfigError::InvalidAddress {
            value: value.to_string(),
        })
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        let secs = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.command.timeout_secs))
            .unwrap_or(defaults::COMMAND_TIMEOUT_SECS);

        if secs == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "command.timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        if secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidDuration {
                field: "command.timeout_secs",
                reason: format!("must be at most {MAX_TIMEOUT_SECS}"),
            });
        }
        Ok(Duration::from_secs(secs))
    }
}
