//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::ConfigError;

/// Template written by the `init` subcommand.
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# dns-toggle configuration

[resolver]
# Fixed resolver applied by `dns-toggle fixed` without an address.
well_known = "1.1.1.1"

[command]
# Timeout for external platform commands (netsh, dhclient), in seconds.
timeout_secs = 10

# POSIX-only file overrides; ignored on Windows.
[posix]
# resolv_conf = "/etc/resolv.conf"
# backup = "/etc/resolv.conf.backup"
"#;

/// Root configuration structure from the TOML file.
///
/// All fields are optional to allow partial configuration that is merged
/// with CLI arguments and built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Resolver address configuration
    #[serde(default)]
    pub resolver: ResolverSection,

    /// External command configuration
    #[serde(default)]
    pub command: CommandSection,

    /// POSIX resolver file overrides
    #[serde(default)]
    pub posix: PosixSection,
}

/// Resolver address configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverSection {
    /// Fixed resolver applied when no address is given on the command line
    pub well_known: Option<String>,
}

/// External command configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandSection {
    /// Timeout for external platform commands, in seconds
    pub timeout_secs: Option<u64>,
}

/// POSIX resolver file overrides (ignored on Windows).
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PosixSection {
    /// Live resolver configuration file
    pub resolv_conf: Option<PathBuf>,

    /// Backup file created before the first destructive write
    pub backup: Option<PathBuf>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid TOML or unknown fields.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Writes the default configuration template to `path`.
///
/// # Errors
///
/// Returns [`ConfigError::FileWrite`] if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
pub(super) fn default_template() -> &'static str {
    DEFAULT_CONFIG_TEMPLATE
}
