//! The resolver configuration mode classification.

use std::fmt;

use serde::Serialize;

/// Classified DNS resolver configuration of the host.
///
/// Produced by [`DnsReader`](crate::dns::DnsReader) from raw platform state
/// and consumed both for display and as the requested target of
/// [`DnsWriter::apply`](crate::dns::DnsWriter::apply).
///
/// # Design Decision
///
/// `FixedResolver` carries the address as a *string*, not an [`std::net::Ipv4Addr`].
/// The writer validates the literal before any platform command runs, so a
/// malformed address coming from user input fails as a value instead of being
/// handed to the OS. The reader only ever constructs this variant from tokens
/// that already parsed as IPv4.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "detail", rename_all = "snake_case")]
pub enum DnsMode {
    /// Resolver assignment is DHCP-managed (automatic).
    Automatic,
    /// A single static resolver address is configured.
    FixedResolver(String),
    /// The raw configuration could not be classified; carries a displayable
    /// description (raw platform text or an error summary).
    Unknown(String),
}

impl DnsMode {
    /// Convenience constructor for a fixed resolver target.
    pub fn fixed(address: impl Into<String>) -> Self {
        Self::FixedResolver(address.into())
    }

    /// Returns true if this mode is DHCP-managed.
    #[must_use]
    pub const fn is_automatic(&self) -> bool {
        matches!(self, Self::Automatic)
    }

    /// Returns true if the configuration could not be classified.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for DnsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Automatic => write!(f, "automatic (DHCP)"),
            Self::FixedResolver(addr) => write!(f, "fixed resolver {addr}"),
            Self::Unknown(detail) => write!(f, "unknown ({detail})"),
        }
    }
}
