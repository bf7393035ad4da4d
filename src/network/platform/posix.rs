//! POSIX implementation: direct `/etc/resolv.conf` management.
//!
//! "Setting DHCP" here means restoring the backup taken before the first
//! static write, or, absent a backup, asking the DHCP client to renegotiate
//! and rewrite the file. Writes go through a staging file renamed over the
//! live path, so the system is never left without a resolver configuration.

use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

use crate::dns::{DnsMode, classify};
use crate::network::{AdapterStatus, CommandRunner, NetworkAdapter, PlatformCommands, PlatformError};

/// Default live resolver configuration file.
const RESOLV_CONF: &str = "/etc/resolv.conf";

/// Default backup path, sibling to the live file.
const RESOLV_CONF_BACKUP: &str = "/etc/resolv.conf.backup";

/// Default sysfs directory for interface enumeration.
const SYSFS_NET: &str = "/sys/class/net";

/// The DHCP client invoked when no backup exists to restore.
const DHCP_CLIENT: &str = "dhclient";

/// POSIX implementation of [`PlatformCommands`].
///
/// All paths are injectable so tests run against a tempdir instead of the
/// real system files.
#[derive(Debug, Clone)]
pub struct PosixCommands {
    runner: CommandRunner,
    resolv_conf: PathBuf,
    backup: PathBuf,
    sysfs_net: PathBuf,
}

impl PosixCommands {
    /// Creates commands targeting the real system paths.
    #[must_use]
    pub fn new(runner: CommandRunner) -> Self {
        Self {
            runner,
            resolv_conf: PathBuf::from(RESOLV_CONF),
            backup: PathBuf::from(RESOLV_CONF_BACKUP),
            sysfs_net: PathBuf::from(SYSFS_NET),
        }
    }

    /// Overrides the live and backup resolver file paths.
    #[must_use]
    pub fn with_resolver_paths(
        mut self,
        resolv_conf: impl Into<PathBuf>,
        backup: impl Into<PathBuf>,
    ) -> Self {
        self.resolv_conf = resolv_conf.into();
        self.backup = backup.into();
        self
    }

    /// Overrides the sysfs directory used for adapter enumeration.
    #[must_use]
    pub fn with_sysfs_net(mut self, sysfs_net: impl Into<PathBuf>) -> Self {
        self.sysfs_net = sysfs_net.into();
        self
    }

    /// Returns the backup file path.
    #[must_use]
    pub fn backup_path(&self) -> &Path {
        &self.backup
    }

    /// Takes a backup of the live file before the first destructive write.
    ///
    /// Best-effort by design: a failed backup is logged and the write goes
    /// ahead. An existing backup is never overwritten implicitly, so the
    /// pre-toggle configuration survives repeated static writes.
    fn backup_existing(&self) {
        if !self.resolv_conf.exists() || self.backup.exists() {
            return;
        }
        match std::fs::copy(&self.resolv_conf, &self.backup) {
            Ok(_) => tracing::debug!(backup = %self.backup.display(), "Saved resolver backup"),
            Err(err) => tracing::warn!(
                backup = %self.backup.display(),
                error = %err,
                "Failed to back up resolver configuration, continuing"
            ),
        }
    }

    /// Atomically replaces the live file: write a sibling staging file,
    /// then rename it over the live path.
    fn replace_resolv_conf(&self, content: &str) -> Result<(), PlatformError> {
        // Append .tmp instead of replacing the extension
        // (resolv.conf -> resolv.conf.tmp).
        let staging = PathBuf::from(format!("{}.tmp", self.resolv_conf.display()));

        std::fs::write(&staging, content).map_err(|source| PlatformError::Io {
            path: staging.clone(),
            source,
        })?;
        std::fs::rename(&staging, &self.resolv_conf).map_err(|source| PlatformError::Io {
            path: self.resolv_conf.clone(),
            source,
        })
    }

    /// Reads the operational status of one sysfs interface entry.
    fn interface_status(&self, name: &str) -> AdapterStatus {
        let operstate = self.sysfs_net.join(name).join("operstate");
        match std::fs::read_to_string(&operstate) {
            // "unknown" counts as enabled: loopback and some virtual
            // interfaces report it while being perfectly operational.
            Ok(state) if matches!(state.trim(), "up" | "unknown") => AdapterStatus::Enabled,
            Ok(_) => AdapterStatus::Disabled,
            Err(err) => {
                tracing::debug!(interface = name, error = %err, "No readable operstate");
                AdapterStatus::Disabled
            }
        }
    }
}

impl PlatformCommands for PosixCommands {
    /// Enumerates interfaces from sysfs with their machine-readable
    /// `operstate`, in name order for a stable first-match policy.
    fn list_adapters(&self) -> Result<Vec<NetworkAdapter>, PlatformError> {
        let entries = std::fs::read_dir(&self.sysfs_net).map_err(|source| PlatformError::Io {
            path: self.sysfs_net.clone(),
            source,
        })?;

        let mut names: Vec<String> = entries
            .filter_map(|entry| Some(entry.ok()?.file_name().to_str()?.to_string()))
            .collect();
        names.sort();

        Ok(names
            .into_iter()
            .map(|name| {
                let status = self.interface_status(&name);
                NetworkAdapter::new(name, status)
            })
            .collect())
    }

    fn resolver_config(&self, _adapter: &NetworkAdapter) -> Result<String, PlatformError> {
        std::fs::read_to_string(&self.resolv_conf).map_err(|source| PlatformError::Io {
            path: self.resolv_conf.clone(),
            source,
        })
    }

    fn classify(&self, raw: &str) -> DnsMode {
        classify::classify_resolv_conf(raw)
    }

    /// Best-effort backup, then atomic replacement with a single
    /// `nameserver` line. The adapter is unused: `resolv.conf` is
    /// system-wide.
    fn set_resolver_static(
        &self,
        _adapter: &NetworkAdapter,
        address: Ipv4Addr,
    ) -> Result<(), PlatformError> {
        self.backup_existing();
        self.replace_resolv_conf(&format!("nameserver {address}\n"))
    }

    /// Restores the backup when one exists; otherwise release-then-renew
    /// through the DHCP client. A failed release short-circuits the renewal
    /// rather than renewing on a half-released lease.
    fn set_resolver_dhcp(&self, _adapter: &NetworkAdapter) -> Result<(), PlatformError> {
        if self.backup.exists() {
            let saved =
                std::fs::read_to_string(&self.backup).map_err(|source| PlatformError::Io {
                    path: self.backup.clone(),
                    source,
                })?;
            // The backup is consumed by reading, not deleted; a later
            // toggle back to a fixed resolver reuses it.
            self.replace_resolv_conf(&saved)?;
            tracing::info!(backup = %self.backup.display(), "Restored resolver backup");
            return Ok(());
        }

        self.runner.run(DHCP_CLIENT, &["-r"])?;
        self.runner.run(DHCP_CLIENT, &[])?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "posix_tests.rs"]
mod tests;
