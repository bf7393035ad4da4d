//! Reading and classifying the current resolver configuration.

use crate::network::{PlatformCommands, PlatformError, find_active_adapter};

use super::DnsMode;

/// Queries the current resolver configuration and classifies it.
///
/// # Contract
///
/// [`read`](Self::read) never fails: every underlying error degrades to
/// [`DnsMode::Unknown`] with a displayable description, so the presentation
/// layer always has something to show.
#[derive(Debug)]
pub struct DnsReader<C> {
    commands: C,
}

impl<C: PlatformCommands> DnsReader<C> {
    /// Creates a reader over the given platform commands.
    pub const fn new(commands: C) -> Self {
        Self { commands }
    }

    /// Reads the current [`DnsMode`].
    ///
    /// Discovers the active adapter, fetches its raw resolver configuration,
    /// and classifies it. Discovery failure yields
    /// `Unknown("no active adapter")`; any other failure yields an
    /// `Unknown` carrying the error summary.
    pub fn read(&self) -> DnsMode {
        let adapter = match find_active_adapter(&self.commands) {
            Ok(Some(adapter)) => adapter,
            Ok(None) => return DnsMode::Unknown("no active adapter".to_string()),
            Err(err) => return DnsMode::Unknown(describe(&err)),
        };

        match self.commands.resolver_config(&adapter) {
            Ok(raw) => {
                let mode = self.commands.classify(&raw);
                tracing::debug!(adapter = %adapter.name, %mode, "Classified resolver state");
                mode
            }
            Err(err) => DnsMode::Unknown(describe(&err)),
        }
    }
}

/// Renders a platform error for the `Unknown` payload.
///
/// Unsupported-platform stands alone so the caller sees
/// `unknown (unsupported platform: …)`; everything else is prefixed as an
/// error.
fn describe(err: &PlatformError) -> String {
    match err {
        PlatformError::Unsupported { .. } => err.to_string(),
        _ => format!("error: {err}"),
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
