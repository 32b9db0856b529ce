//! Logging setup using tracing.
//!
//! The containers emit `tracing` events (growth at `trace`, rejected handle
//! calls at `debug`). Nothing is printed until a subscriber is installed;
//! this module installs one that writes to stderr and also captures `log`
//! crate records.
//!
//! # Example
//!
//! ```ignore
//! use dynarray_core::logger::init_logging;
//!
//! init_logging();
//! // RUST_LOG=dynarray=trace shows every reallocation.
//! ```

use std::sync::OnceLock;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Installs the stderr subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once is harmless, later calls are ignored. If another global
/// subscriber is already set, it is left in place.
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        tracing_log::LogTracer::init().ok();

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(true)
            .with_line_number(true)
            .with_span_events(FmtSpan::NONE)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .ok();
    });
}
