//! Tests for the DNS state reader.

use crate::dns::test_support::{Call, FakeCommands};
use crate::dns::{DnsMode, DnsReader};
use crate::network::NetworkAdapter;
use crate::network::platform::UnsupportedCommands;

fn wifi_setup(raw: &str) -> FakeCommands {
    FakeCommands::new(
        vec![
            NetworkAdapter::disabled("Ethernet"),
            NetworkAdapter::enabled("Wi-Fi"),
        ],
        raw,
    )
}

#[test]
fn reads_automatic_from_dhcp_marker() {
    let commands = wifi_setup("DHCP Enabled: Yes");
    let reader = DnsReader::new(&commands);

    assert_eq!(reader.read(), DnsMode::Automatic);
    // Raw config was fetched from the active (first enabled) adapter.
    assert!(commands.calls().contains(&Call::Read {
        adapter: "Wi-Fi".into()
    }));
}

#[test]
fn reads_fixed_resolver_from_static_output() {
    let commands = wifi_setup("Statically Configured DNS Servers:    1.1.1.1\n");
    let reader = DnsReader::new(&commands);

    assert_eq!(reader.read(), DnsMode::fixed("1.1.1.1"));
}

#[test]
fn garbage_config_degrades_to_unknown() {
    let commands = wifi_setup("%% not a dns listing %%");
    let reader = DnsReader::new(&commands);

    assert!(reader.read().is_unknown());
}

#[test]
fn no_enabled_adapter_reports_unknown() {
    let commands = FakeCommands::new(vec![NetworkAdapter::disabled("Ethernet")], "");
    let reader = DnsReader::new(&commands);

    assert_eq!(reader.read(), DnsMode::Unknown("no active adapter".into()));
    // No config read was attempted without an adapter.
    assert_eq!(commands.calls(), vec![Call::List]);
}

#[test]
fn read_failure_degrades_to_unknown_error() {
    let commands = FakeCommands::failing_reads(vec![NetworkAdapter::enabled("Wi-Fi")]);
    let reader = DnsReader::new(&commands);

    match reader.read() {
        DnsMode::Unknown(detail) => {
            assert!(detail.starts_with("error:"), "got: {detail}");
            assert!(detail.contains("netsh"));
        }
        other => panic!("expected Unknown, got {other:?}"),
    }
}

#[test]
fn unsupported_platform_reports_unknown() {
    let reader = DnsReader::new(UnsupportedCommands);

    match reader.read() {
        DnsMode::Unknown(detail) => {
            assert!(detail.starts_with("unsupported platform:"), "got: {detail}");
        }
        other => panic!("expected Unknown, got {other:?}"),
    }
}
