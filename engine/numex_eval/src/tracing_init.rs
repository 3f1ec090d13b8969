//! Opt-in tracing output.
//!
//! The crate only emits `tracing` events; it never installs a subscriber on
//! its own. Applications that want the events without wiring up their own
//! subscriber call [`init_tracing`].

use std::sync::OnceLock;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Outcome of the first `init_tracing` call, shared by every later call.
static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Returns whether this crate's subscriber is the global one. That is false
/// when `RUST_LOG` is unset or another subscriber was installed first.
/// Only the first call does any work; later calls report the same outcome.
///
/// - `RUST_LOG=numex_eval=debug`: rejected literals and parameter lists
/// - `RUST_LOG=numex_eval=trace`: parameter assignment spans, worklist summaries
pub fn init_tracing() -> bool {
    *INSTALLED.get_or_init(|| {
        let Ok(directives) = std::env::var("RUST_LOG") else {
            return false;
        };
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(EnvFilter::new(directives))
            .try_init()
            .is_ok()
    })
}

#[cfg(test)]
mod tests;
