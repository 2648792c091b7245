//! Opt-in log output.
//!
//! The crate only emits `tracing` events; it never installs a subscriber on
//! its own. Binaries and tests that want to see the events call
//! [`init_tracing`].

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a fmt subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=tir_field_class=debug`. Safe to call more than once, and a
/// subscriber installed elsewhere is left in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
