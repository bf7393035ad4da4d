//! Shared fake platform commands for reader/writer tests.

use std::net::Ipv4Addr;
use std::sync::Mutex;

use crate::dns::{DnsMode, classify};
use crate::network::{NetworkAdapter, PlatformCommands, PlatformError};

/// A platform call recorded by [`FakeCommands`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Read { adapter: String },
    SetStatic { adapter: String, address: Ipv4Addr },
    SetDhcp { adapter: String },
}

/// Fake `netsh`-flavored platform: serves a fixed adapter list, keeps the
/// "current" raw resolver text in memory, and records every call so tests
/// can assert on exactly which platform operations ran.
pub struct FakeCommands {
    adapters: Vec<NetworkAdapter>,
    raw: Mutex<String>,
    calls: Mutex<Vec<Call>>,
    fail_sets: bool,
    fail_reads: bool,
}

impl FakeCommands {
    pub fn new(adapters: Vec<NetworkAdapter>, raw: &str) -> Self {
        Self {
            adapters,
            raw: Mutex::new(raw.to_string()),
            calls: Mutex::new(Vec::new()),
            fail_sets: false,
            fail_reads: false,
        }
    }

    /// A fake whose set operations fail with a command error.
    pub fn failing_sets(adapters: Vec<NetworkAdapter>, raw: &str) -> Self {
        Self {
            fail_sets: true,
            ..Self::new(adapters, raw)
        }
    }

    /// A fake whose config reads fail with a command error.
    pub fn failing_reads(adapters: Vec<NetworkAdapter>) -> Self {
        Self {
            fail_reads: true,
            ..Self::new(adapters, "")
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn command_failed() -> PlatformError {
        PlatformError::CommandFailed {
            program: "netsh".into(),
            code: 1,
            stderr: "The parameter is incorrect.".into(),
        }
    }
}

impl PlatformCommands for FakeCommands {
    fn list_adapters(&self) -> Result<Vec<NetworkAdapter>, PlatformError> {
        self.record(Call::List);
        Ok(self.adapters.clone())
    }

    fn resolver_config(&self, adapter: &NetworkAdapter) -> Result<String, PlatformError> {
        self.record(Call::Read {
            adapter: adapter.name.clone(),
        });
        if self.fail_reads {
            return Err(Self::command_failed());
        }
        Ok(self.raw.lock().unwrap().clone())
    }

    fn classify(&self, raw: &str) -> DnsMode {
        classify::classify_netsh(raw)
    }

    fn set_resolver_static(
        &self,
        adapter: &NetworkAdapter,
        address: Ipv4Addr,
    ) -> Result<(), PlatformError> {
        self.record(Call::SetStatic {
            adapter: adapter.name.clone(),
            address,
        });
        if self.fail_sets {
            return Err(Self::command_failed());
        }
        *self.raw.lock().unwrap() =
            format!("Statically Configured DNS Servers:    {address}\n");
        Ok(())
    }

    fn set_resolver_dhcp(&self, adapter: &NetworkAdapter) -> Result<(), PlatformError> {
        self.record(Call::SetDhcp {
            adapter: adapter.name.clone(),
        });
        if self.fail_sets {
            return Err(Self::command_failed());
        }
        *self.raw.lock().unwrap() =
            "DNS servers configured through DHCP:  192.168.1.1\n".to_string();
        Ok(())
    }
}
