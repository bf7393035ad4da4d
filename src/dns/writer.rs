//! Applying a requested resolver mode transition.

use std::net::Ipv4Addr;

use crate::network::{NetworkAdapter, PlatformCommands, find_active_adapter};

use super::{DnsMode, OperationResult};

/// Applies resolver mode transitions through the platform commands.
///
/// Every entry point returns an [`OperationResult`] value; nothing panics
/// or unwinds across this boundary. The active adapter is re-resolved
/// immediately before every write so a freshly disabled adapter fails the
/// operation instead of misdirecting it.
///
/// The adapter requirement holds on every platform, including POSIX where
/// `resolv.conf` is system-wide and the write is not addressed to an
/// adapter: a host with no enabled interface gets a failed result rather
/// than a resolver change that cannot take effect. Loopback counts as
/// enabled there, so the gate only fires when sysfs lists nothing usable.
#[derive(Debug)]
pub struct DnsWriter<C> {
    commands: C,
}

impl<C: PlatformCommands> DnsWriter<C> {
    /// Creates a writer over the given platform commands.
    pub const fn new(commands: C) -> Self {
        Self { commands }
    }

    /// Applies the requested mode.
    ///
    /// - `Automatic` returns resolver assignment to DHCP.
    /// - `FixedResolver` validates the address *before any platform call*
    ///   and then configures it as the single static resolver.
    /// - `Unknown` is not a valid target and fails as a value.
    pub fn apply(&self, requested: &DnsMode) -> OperationResult {
        let result = match requested {
            DnsMode::Automatic => self.apply_dhcp(),
            DnsMode::FixedResolver(address) => self.apply_static(address),
            DnsMode::Unknown(_) => {
                OperationResult::fail("cannot apply an unclassified resolver mode")
            }
        };

        if result.success {
            tracing::info!(mode = %requested, "Applied resolver mode");
        } else {
            tracing::warn!(mode = %requested, message = %result.message, "Apply failed");
        }
        result
    }

    fn apply_static(&self, address: &str) -> OperationResult {
        let address = match validate_address(address) {
            Ok(address) => address,
            Err(result) => return result,
        };
        let adapter = match self.active_adapter() {
            Ok(adapter) => adapter,
            Err(result) => return result,
        };

        match self.commands.set_resolver_static(&adapter, address) {
            Ok(()) => OperationResult::ok(format!(
                "resolver set to {address} on '{}'",
                adapter.name
            )),
            Err(err) => err.into(),
        }
    }

    fn apply_dhcp(&self) -> OperationResult {
        let adapter = match self.active_adapter() {
            Ok(adapter) => adapter,
            Err(result) => return result,
        };

        match self.commands.set_resolver_dhcp(&adapter) {
            Ok(()) => OperationResult::ok(format!(
                "resolver set to automatic (DHCP) on '{}'",
                adapter.name
            )),
            Err(err) => err.into(),
        }
    }

    /// Re-resolves the active adapter, mapping absence to a failed result.
    fn active_adapter(&self) -> Result<NetworkAdapter, OperationResult> {
        match find_active_adapter(&self.commands) {
            Ok(Some(adapter)) => Ok(adapter),
            Ok(None) => Err(OperationResult::fail("no enabled adapter found")),
            Err(err) => Err(err.into()),
        }
    }
}

/// Validates a user-supplied resolver address as an IPv4 literal.
///
/// Rejects empty input and anything that is not exactly a dotted-quad
/// (which also rules out embedded command-separator characters), so a
/// malformed address never reaches an OS command line.
///
/// # Errors
///
/// Returns a failed [`OperationResult`] describing the rejection.
pub fn validate_address(address: &str) -> Result<Ipv4Addr, OperationResult> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return Err(OperationResult::fail("invalid address: empty"));
    }
    trimmed
        .parse()
        .map_err(|_| OperationResult::fail(format!("invalid address: '{trimmed}'")))
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
