//! Platform-specific implementations of [`PlatformCommands`].
//!
//! # Platform Support
//!
//! - **Windows**: adapter enumeration via `GetAdaptersAddresses`, resolver
//!   read/write by shelling out to `netsh`.
//! - **POSIX**: direct reads/writes of `/etc/resolv.conf` with
//!   backup/restore, adapter enumeration from sysfs.
//! - **Anything else**: [`UnsupportedCommands`], which fails every
//!   operation as a value.
//!
//! [`PlatformCommands`]: crate::network::PlatformCommands

#[cfg(unix)]
mod posix;
mod unsupported;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use posix::PosixCommands;
pub use unsupported::UnsupportedCommands;
#[cfg(windows)]
pub use windows::WindowsCommands;

// Re-export the implementation for the build target as NativeCommands.
#[cfg(unix)]
pub use posix::PosixCommands as NativeCommands;
#[cfg(not(any(unix, windows)))]
pub use unsupported::UnsupportedCommands as NativeCommands;
#[cfg(windows)]
pub use windows::WindowsCommands as NativeCommands;
