//! Tracing initialization

use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the global subscriber
///
/// Filter comes from `RUST_LOG`, falling back to `info`. With `json` set,
/// events are written as one JSON object per line. Later calls are no-ops.
pub fn init_tracing(json: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let registry = tracing_subscriber::registry().with(filter);

        if json {
            registry
                .with(fmt::layer().json().with_current_span(true).with_target(true))
                .init();
        } else {
            registry.with(fmt::layer().with_target(true)).init();
        }
    });
}
