//! Fallback implementation for operating systems without a command path.

use std::net::Ipv4Addr;

use crate::dns::DnsMode;
use crate::network::{NetworkAdapter, PlatformCommands, PlatformError};

/// Always-failing [`PlatformCommands`] implementation.
///
/// Every operation returns [`PlatformError::Unsupported`] naming the
/// running OS; the reader surfaces this as
/// `Unknown("unsupported platform: …")` and the writer as a failed
/// [`OperationResult`](crate::dns::OperationResult).
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedCommands;

impl PlatformCommands for UnsupportedCommands {
    fn list_adapters(&self) -> Result<Vec<NetworkAdapter>, PlatformError> {
        Err(PlatformError::unsupported())
    }

    fn resolver_config(&self, _adapter: &NetworkAdapter) -> Result<String, PlatformError> {
        Err(PlatformError::unsupported())
    }

    fn classify(&self, raw: &str) -> DnsMode {
        // Unreachable through the reader (config reads fail first), but the
        // contract still demands a value.
        DnsMode::Unknown(raw.to_string())
    }

    fn set_resolver_static(
        &self,
        _adapter: &NetworkAdapter,
        _address: Ipv4Addr,
    ) -> Result<(), PlatformError> {
        Err(PlatformError::unsupported())
    }

    fn set_resolver_dhcp(&self, _adapter: &NetworkAdapter) -> Result<(), PlatformError> {
        Err(PlatformError::unsupported())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_operation_fails_with_unsupported() {
        let commands = UnsupportedCommands;
        let adapter = NetworkAdapter::enabled("any");

        assert!(matches!(
            commands.list_adapters(),
            Err(PlatformError::Unsupported { .. })
        ));
        assert!(matches!(
            commands.resolver_config(&adapter),
            Err(PlatformError::Unsupported { .. })
        ));
        assert!(matches!(
            commands.set_resolver_static(&adapter, Ipv4Addr::new(1, 1, 1, 1)),
            Err(PlatformError::Unsupported { .. })
        ));
        assert!(matches!(
            commands.set_resolver_dhcp(&adapter),
            Err(PlatformError::Unsupported { .. })
        ));
    }
}
