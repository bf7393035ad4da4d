//! Platform command capability trait and error types.

use std::net::Ipv4Addr;
use std::path::PathBuf;

use thiserror::Error;

use super::NetworkAdapter;
use crate::dns::DnsMode;

/// Error type for platform command operations.
///
/// Describes what went wrong without dictating recovery strategy.
/// The reader degrades these into [`DnsMode::Unknown`], the writer folds
/// them into an [`OperationResult`](crate::dns::OperationResult) message;
/// neither lets them escape the core as a panic.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The host operating system has no supported command path.
    #[error("unsupported platform: {os}")]
    Unsupported {
        /// The `std::env::consts::OS` value observed at runtime.
        os: String,
    },

    /// An external command could not be launched.
    #[error("failed to launch '{program}': {source}")]
    Launch {
        /// Program that failed to start.
        program: String,
        /// Underlying I/O error (typically not-found or permission).
        #[source]
        source: std::io::Error,
    },

    /// An external command ran but exited unsuccessfully.
    #[error("'{program}' exited with status {code}: {stderr}")]
    CommandFailed {
        /// Program that failed.
        program: String,
        /// Exit code, or -1 when terminated by a signal.
        code: i32,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// An external command exceeded the configured execution timeout.
    #[error("'{program}' timed out after {seconds}s")]
    Timeout {
        /// Program that was killed.
        program: String,
        /// Timeout that was exceeded.
        seconds: u64,
    },

    /// File I/O on resolver configuration failed.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl PlatformError {
    /// Creates an [`PlatformError::Unsupported`] for the running OS.
    #[must_use]
    pub fn unsupported() -> Self {
        Self::Unsupported {
            os: std::env::consts::OS.to_string(),
        }
    }

    /// Returns `true` if the underlying cause is an OS permission denial.
    ///
    /// Useful for presentation layers that want to hint at re-running
    /// elevated; control logic should still branch only on success/failure.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::Io { source, .. } | Self::Launch { source, .. } => {
                source.kind() == std::io::ErrorKind::PermissionDenied
            }
            _ => false,
        }
    }
}

/// Capability interface over the OS-specific resolver configuration
/// mechanism.
///
/// # Design
///
/// - The DNS state machine ([`DnsReader`](crate::dns::DnsReader) /
///   [`DnsWriter`](crate::dns::DnsWriter)) depends only on this trait, so it
///   can be tested against fakes instead of mutating real OS state.
/// - Platform implementations live in [`platform`](super::platform):
///   `netsh` on Windows, `/etc/resolv.conf` on POSIX, and an always-failing
///   fallback elsewhere.
/// - Implementations must not panic on command or I/O failure; every failure
///   is an error value.
///
/// # Example
///
/// ```ignore
/// use dns_toggle::network::{NetworkAdapter, PlatformCommands, PlatformError};
/// use dns_toggle::dns::DnsMode;
///
/// struct FakeCommands;
///
/// impl PlatformCommands for FakeCommands {
///     fn list_adapters(&self) -> Result<Vec<NetworkAdapter>, PlatformError> {
///         Ok(vec![NetworkAdapter::enabled("Wi-Fi")])
///     }
///     // ...
/// }
/// ```
pub trait PlatformCommands: Send + Sync {
    /// Lists all network adapters in platform order.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] when enumeration fails or the platform is
    /// unsupported.
    fn list_adapters(&self) -> Result<Vec<NetworkAdapter>, PlatformError>;

    /// Reads the raw, platform-specific resolver configuration text for the
    /// given adapter.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] when the underlying command or file read
    /// fails.
    fn resolver_config(&self, adapter: &NetworkAdapter) -> Result<String, PlatformError>;

    /// Classifies raw configuration text produced by
    /// [`resolver_config`](Self::resolver_config) into a [`DnsMode`].
    ///
    /// Must not fail: unclassifiable input yields [`DnsMode::Unknown`].
    fn classify(&self, raw: &str) -> DnsMode;

    /// Configures a single static resolver address on the given adapter.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] when the write fails; implementations must
    /// not leave the system without any resolver configuration.
    fn set_resolver_static(
        &self,
        adapter: &NetworkAdapter,
        address: Ipv4Addr,
    ) -> Result<(), PlatformError>;

    /// Returns resolver assignment to DHCP (automatic) on the given adapter.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] when the restore/renegotiation fails.
    fn set_resolver_dhcp(&self, adapter: &NetworkAdapter) -> Result<(), PlatformError>;
}

// Blanket implementation so reader and writer can share one commands value.
impl<C: PlatformCommands + ?Sized> PlatformCommands for &C {
    fn list_adapters(&self) -> Result<Vec<NetworkAdapter>, PlatformError> {
        (*self).list_adapters()
    }

    fn resolver_config(&self, adapter: &NetworkAdapter) -> Result<String, PlatformError> {
        (*self).resolver_config(adapter)
    }

    fn classify(&self, raw: &str) -> DnsMode {
        (*self).classify(raw)
    }

    fn set_resolver_static(
        &self,
        adapter: &NetworkAdapter,
        address: Ipv4Addr,
    ) -> Result<(), PlatformError> {
        (*self).set_resolver_static(adapter, address)
    }

    fn set_resolver_dhcp(&self, adapter: &NetworkAdapter) -> Result<(), PlatformError> {
        (*self).set_resolver_dhcp(adapter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_names_the_running_os() {
        let err = PlatformError::unsupported();
        assert!(err.to_string().contains(std::env::consts::OS));
    }

    #[test]
    fn command_failed_displays_code_and_stderr() {
        let err = PlatformError::CommandFailed {
            program: "netsh".into(),
            code: 1,
            stderr: "The parameter is incorrect.".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("netsh"));
        assert!(msg.contains("status 1"));
        assert!(msg.contains("parameter is incorrect"));
    }

    #[test]
    fn permission_denied_detected_for_io() {
        let err = PlatformError::Io {
            path: "/etc/resolv.conf".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.is_permission_denied());

        let err = PlatformError::Timeout {
            program: "dhclient".into(),
            seconds: 10,
        };
        assert!(!err.is_permission_denied());
    }
}
