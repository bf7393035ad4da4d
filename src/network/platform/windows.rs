//! Windows implementation: `GetAdaptersAddresses` enumeration plus `netsh`
//! for per-interface DNS read/write.
//!
//! Enumeration deliberately uses the API's machine-readable `OperStatus`
//! field rather than parsing `netsh interface show interface` output, whose
//! status column is localized.

use std::net::Ipv4Addr;

use windows::Win32::Foundation::{ERROR_BUFFER_OVERFLOW, NO_ERROR, WIN32_ERROR};
use windows::Win32::NetworkManagement::IpHelper::{
    GAA_FLAG_SKIP_ANYCAST, GAA_FLAG_SKIP_DNS_SERVER, GAA_FLAG_SKIP_MULTICAST,
    GAA_FLAG_SKIP_UNICAST, GetAdaptersAddresses, IP_ADAPTER_ADDRESSES_LH,
};
use windows::Win32::NetworkManagement::Ndis::IfOperStatusUp;
use windows::Win32::Networking::WinSock::AF_UNSPEC;

use crate::dns::{DnsMode, classify};
use crate::network::{
    AdapterStatus, CommandRunner, NetworkAdapter, PlatformCommands, PlatformError,
};

/// Buffer size hint for `GetAdaptersAddresses`.
/// The API reports the actual required size if this is insufficient.
const INITIAL_BUFFER_SIZE: u32 = 16384;

/// Windows implementation of [`PlatformCommands`].
#[derive(Debug, Clone)]
pub struct WindowsCommands {
    runner: CommandRunner,
}

impl WindowsCommands {
    /// Creates commands shelling out through the given runner.
    #[must_use]
    pub const fn new(runner: CommandRunner) -> Self {
        Self { runner }
    }
}

impl PlatformCommands for WindowsCommands {
    fn list_adapters(&self) -> Result<Vec<NetworkAdapter>, PlatformError> {
        enumerate_adapters()
    }

    fn resolver_config(&self, adapter: &NetworkAdapter) -> Result<String, PlatformError> {
        let name = name_argument(adapter);
        self.runner
            .run("netsh", &["interface", "ip", "show", "dns", &name])
    }

    fn classify(&self, raw: &str) -> DnsMode {
        classify::classify_netsh(raw)
    }

    fn set_resolver_static(
        &self,
        adapter: &NetworkAdapter,
        address: Ipv4Addr,
    ) -> Result<(), PlatformError> {
        let name = name_argument(adapter);
        let address = address.to_string();
        self.runner.run(
            "netsh",
            &["interface", "ip", "set", "dns", &name, "static", &address, "primary"],
        )?;
        Ok(())
    }

    fn set_resolver_dhcp(&self, adapter: &NetworkAdapter) -> Result<(), PlatformError> {
        let name = name_argument(adapter);
        self.runner
            .run("netsh", &["interface", "ip", "set", "dns", &name, "dhcp"])?;
        Ok(())
    }
}

/// Builds the `name=<alias>` argument `netsh` expects.
fn name_argument(adapter: &NetworkAdapter) -> String {
    format!("name={}", adapter.name)
}

/// Enumerates adapters with their friendly names and operational status.
fn enumerate_adapters() -> Result<Vec<NetworkAdapter>, PlatformError> {
    let buffer = adapter_addresses_buffer()?;

    let mut adapters = Vec::new();
    // SAFETY: GetAdaptersAddresses returns a properly aligned buffer for
    // IP_ADAPTER_ADDRESSES_LH, and the linked list stays valid while the
    // buffer is alive.
    #[allow(clippy::cast_ptr_alignment)]
    let mut current = buffer.as_ptr().cast::<IP_ADAPTER_ADDRESSES_LH>();
    while !current.is_null() {
        let entry = unsafe { &*current };
        if let Ok(name) = unsafe { entry.FriendlyName.to_string() } {
            let status = if entry.OperStatus == IfOperStatusUp {
                AdapterStatus::Enabled
            } else {
                AdapterStatus::Disabled
            };
            adapters.push(NetworkAdapter::new(name, status));
        }
        current = entry.Next;
    }
    Ok(adapters)
}

/// Calls `GetAdaptersAddresses` with the usual two-call retry pattern and
/// returns the raw buffer.
fn adapter_addresses_buffer() -> Result<Vec<u8>, PlatformError> {
    // Names and status only; skip all address lists.
    let flags = GAA_FLAG_SKIP_ANYCAST
        | GAA_FLAG_SKIP_MULTICAST
        | GAA_FLAG_SKIP_DNS_SERVER
        | GAA_FLAG_SKIP_UNICAST;
    let family = u32::from(AF_UNSPEC.0);

    let mut buffer: Vec<u8> = vec![0u8; INITIAL_BUFFER_SIZE as usize];
    let mut size = INITIAL_BUFFER_SIZE;

    // SAFETY: buffer and size are valid; the API writes adapter data into
    // the buffer and updates size with the required length.
    let mut result = unsafe {
        GetAdaptersAddresses(
            family,
            flags,
            None,
            Some(buffer.as_mut_ptr().cast()),
            &raw mut size,
        )
    };

    if result == ERROR_BUFFER_OVERFLOW.0 {
        buffer.resize(size as usize, 0);
        // SAFETY: same as above, with the exact required size.
        result = unsafe {
            GetAdaptersAddresses(
                family,
                flags,
                None,
                Some(buffer.as_mut_ptr().cast()),
                &raw mut size,
            )
        };
    }

    if result == NO_ERROR.0 {
        Ok(buffer)
    } else {
        Err(win32_error("GetAdaptersAddresses", result))
    }
}

/// Converts a Win32 status code into a [`PlatformError`].
fn win32_error(api: &str, code: u32) -> PlatformError {
    let err = windows::core::Error::from(WIN32_ERROR(code));
    PlatformError::CommandFailed {
        program: api.to_string(),
        code: i32::try_from(code).unwrap_or(-1),
        stderr: err.message(),
    }
}
