//! dns-toggle: host DNS resolver configuration switcher
//!
//! A library for inspecting the active network adapter's resolver
//! configuration, classifying it into a [`dns::DnsMode`], and applying
//! mode transitions (DHCP / well-known / custom resolver) with
//! backup/restore semantics.

pub mod config;
pub mod dns;
pub mod network;
pub mod privilege;
