//! SeaORM data models for the boxit game store: customers and catalog
//! entries. Schema creation lives in the sibling `migration` crate.

pub mod entities;

// Re-export tracing for use in this crate
pub use tracing;

/// Initialize tracing if not already initialized.
///
/// Logs to stdout; the level is controlled via `RUST_LOG`. The server
/// binary installs its own subscriber, so this is only for standalone
/// consumers of the model crate.
#[cfg(not(test))]
pub fn init_tracing() {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(FmtSpan::CLOSE)
        .init();
}
