//! Diagnostic logging for the `keywordmap` binary.
//!
//! Library code logs through `tracing` (merge and keyword enumeration) and
//! `log` (manifest and config loading). [`init_tracing`] installs one
//! subscriber on stderr that also receives `log` records, so stdout stays
//! clean for reports.

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static TRACING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Filter directive for a `-v` count when `RUST_LOG` is not set
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "keywordmap=warn",
        1 => "keywordmap=info",
        2 => "keywordmap=debug",
        _ => "keywordmap=trace",
    }
}

/// Install the process-global subscriber.
///
/// `RUST_LOG` wins when present and valid. Repeated calls are no-ops, and
/// a subscriber installed by someone else is left alone.
pub fn init_tracing(verbosity: u8) {
    if TRACING_INITIALIZED.get().is_some() {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(e) = installed {
        tracing::debug!("tracing subscriber already installed: {e}");
    }
    let _ = TRACING_INITIALIZED.set(());
}
