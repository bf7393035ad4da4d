//! Classification of raw platform resolver text into a [`DnsMode`].
//!
//! Pure functions over text so the policy is unit-testable on any host;
//! the platform implementations delegate here from
//! [`PlatformCommands::classify`](crate::network::PlatformCommands::classify).

use std::net::Ipv4Addr;
use std::sync::LazyLock;

use regex::Regex;

use super::DnsMode;

/// Candidate IPv4 tokens; octet range is validated by parsing afterwards.
static IPV4_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").expect("static pattern"));

/// Returns the first token in `text` that parses as an IPv4 address.
fn first_ipv4(text: &str) -> Option<Ipv4Addr> {
    IPV4_TOKEN
        .find_iter(text)
        .find_map(|m| m.as_str().parse().ok())
}

/// Classifies `netsh interface ip show dns` output.
///
/// Policy: a DHCP/automatic marker anywhere in the text means DHCP-managed;
/// `netsh` localizes the marker, so both the English `DHCP` and the Chinese
/// `自动` form are recognized. Otherwise the first IPv4 token is the
/// configured static resolver. Anything else is unclassifiable.
#[must_use]
pub fn classify_netsh(raw: &str) -> DnsMode {
    if raw.contains("DHCP") || raw.contains("自动") {
        return DnsMode::Automatic;
    }
    match first_ipv4(raw) {
        Some(addr) => DnsMode::FixedResolver(addr.to_string()),
        None => DnsMode::Unknown(raw.trim().to_string()),
    }
}

/// Classifies `/etc/resolv.conf` content.
///
/// Policy: a comment header announcing the file is machine-generated
/// (NetworkManager, dhclient, resolvconf all write a "generated by" banner)
/// means DHCP-managed. Otherwise the first `nameserver` line with a valid
/// IPv4 address is the static resolver. Anything else is unclassifiable.
#[must_use]
pub fn classify_resolv_conf(raw: &str) -> DnsMode {
    let generated = raw
        .lines()
        .take_while(|line| line.starts_with('#') || line.starts_with(';'))
        .any(|line| line.to_ascii_lowercase().contains("generated by"));
    if generated {
        return DnsMode::Automatic;
    }

    let nameserver = raw.lines().find_map(|line| {
        let rest = line.trim().strip_prefix("nameserver")?;
        rest.trim().parse::<Ipv4Addr>().ok()
    });
    match nameserver {
        Some(addr) => DnsMode::FixedResolver(addr.to_string()),
        None => DnsMode::Unknown(raw.trim().to_string()),
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
