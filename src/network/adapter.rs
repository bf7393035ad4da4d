//! Network adapter representation and active-adapter selection.

use std::fmt;

use serde::Serialize;

use super::{PlatformCommands, PlatformError};

/// Operational status of a network adapter.
///
/// # Design Decision
///
/// This is a machine-readable flag taken from platform APIs
/// (`OperStatus` from `GetAdaptersAddresses` on Windows, sysfs `operstate`
/// on Linux), never derived by matching localized status strings, so
/// adapter selection behaves identically on any system locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterStatus {
    /// The adapter is operationally up.
    Enabled,
    /// The adapter is down or disconnected.
    Disabled,
}

impl AdapterStatus {
    /// Returns true for [`AdapterStatus::Enabled`].
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// A network adapter as discovered at query time.
///
/// Discovered fresh on every query and never persisted; the identifier is
/// whatever the platform uses to address the adapter in follow-up commands
/// (the interface alias on Windows, the interface name on Linux).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkAdapter {
    /// Platform-specific adapter identifier (e.g. "Wi-Fi", "eth0").
    pub name: String,
    /// Machine-readable operational status.
    pub status: AdapterStatus,
}

impl NetworkAdapter {
    /// Creates an adapter with the given status.
    pub fn new(name: impl Into<String>, status: AdapterStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }

    /// Creates an enabled adapter (convenience for fixtures).
    pub fn enabled(name: impl Into<String>) -> Self {
        Self::new(name, AdapterStatus::Enabled)
    }

    /// Creates a disabled adapter.
    pub fn disabled(name: impl Into<String>) -> Self {
        Self::new(name, AdapterStatus::Disabled)
    }
}

impl fmt::Display for NetworkAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.status.is_enabled() {
            "enabled"
        } else {
            "disabled"
        };
        write!(f, "{} ({status})", self.name)
    }
}

/// Selects the first enabled adapter from an ordered list.
///
/// Selection policy is first-match-wins; ties between multiple enabled
/// adapters are not otherwise broken. Multi-adapter systems therefore
/// operate on whichever enabled adapter the platform lists first.
#[must_use]
pub fn first_enabled(adapters: &[NetworkAdapter]) -> Option<&NetworkAdapter> {
    adapters.iter().find(|a| a.status.is_enabled())
}

/// Discovers the single "active" adapter to operate on.
///
/// Lists adapters via the platform commands and returns the first enabled
/// one, or `Ok(None)` when no adapter is enabled.
///
/// # Errors
///
/// Returns [`PlatformError`] when adapter enumeration itself fails.
pub fn find_active_adapter<C: PlatformCommands + ?Sized>(
    commands: &C,
) -> Result<Option<NetworkAdapter>, PlatformError> {
    let adapters = commands.list_adapters()?;
    let active = first_enabled(&adapters).cloned();
    match &active {
        Some(adapter) => tracing::debug!(adapter = %adapter.name, "Selected active adapter"),
        None => tracing::debug!(count = adapters.len(), "No enabled adapter found"),
    }
    Ok(active)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_enabled_picks_first_match() {
        let adapters = vec![
            NetworkAdapter::disabled("Ethernet"),
            NetworkAdapter::enabled("Wi-Fi"),
            NetworkAdapter::enabled("vEthernet (WSL)"),
        ];

        let active = first_enabled(&adapters).unwrap();
        assert_eq!(active.name, "Wi-Fi");
    }

    #[test]
    fn first_enabled_none_when_all_disabled() {
        let adapters = vec![
            NetworkAdapter::disabled("Ethernet"),
            NetworkAdapter::disabled("Wi-Fi"),
        ];
        assert!(first_enabled(&adapters).is_none());
    }

    #[test]
    fn first_enabled_none_on_empty_list() {
        assert!(first_enabled(&[]).is_none());
    }

    #[test]
    fn display_includes_status() {
        assert_eq!(NetworkAdapter::enabled("eth0").to_string(), "eth0 (enabled)");
        assert_eq!(
            NetworkAdapter::disabled("Ethernet 2").to_string(),
            "Ethernet 2 (disabled)"
        );
    }
}
