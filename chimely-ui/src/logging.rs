//! Tracing bootstrap for hosts and demo binaries.
//!
//! ## Usage
//!
//! Call [`init_tracing`] once at startup. `RUST_LOG` overrides the default
//! filter.

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "error,chimely_ui=info,chimely_components=info,chimely_scene=info";

/// Installs a global `tracing` subscriber writing to stderr.
///
/// Later calls are no-ops, as are calls made after the host installed its
/// own subscriber.
pub fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(DEFAULT_FILTER) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}
