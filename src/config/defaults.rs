//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// The well-known fixed resolver applied when no address is given
/// (Cloudflare public DNS).
pub const WELL_KNOWN_RESOLVER: &str = "1.1.1.1";

/// Default timeout for external platform commands, in seconds.
pub const COMMAND_TIMEOUT_SECS: u64 = 10;

/// Default command timeout as a Duration.
#[must_use]
pub const fn command_timeout() -> Duration {
    Duration::from_secs(COMMAND_TIMEOUT_SECS)
}
