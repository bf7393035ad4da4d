//! The DNS configuration state machine.
//!
//! This module is the core of the crate:
//! - [`DnsMode`] classifies resolver state (automatic / fixed / unknown)
//! - [`classify`] holds the pure text-classification policies
//! - [`DnsReader`] reads and classifies current state (never fails)
//! - [`DnsWriter`] applies a requested transition, returning an
//!   [`OperationResult`] value
//!
//! Both reader and writer are generic over
//! [`PlatformCommands`](crate::network::PlatformCommands) so the state
//! machine is tested against fakes instead of real OS mutation.

pub mod classify;
mod mode;
mod outcome;
mod reader;
mod writer;

#[cfg(test)]
mod test_support;

pub use mode::DnsMode;
pub use outcome::OperationResult;
pub use reader::DnsReader;
pub use writer::{DnsWriter, validate_address};
