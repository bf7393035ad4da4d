//! Network layer: adapter discovery and the platform command capability.
//!
//! This module provides:
//! - Adapter representation and active-adapter selection ([`NetworkAdapter`],
//!   [`find_active_adapter`])
//! - The OS capability interface ([`PlatformCommands`]) and its error type
//! - External command execution with timeouts ([`CommandRunner`])
//! - Platform-specific implementations ([`platform`])

mod adapter;
mod commands;
pub mod platform;
mod process;

pub use adapter::{AdapterStatus, NetworkAdapter, find_active_adapter, first_enabled};
pub use commands::{PlatformCommands, PlatformError};
pub use process::CommandRunner;
