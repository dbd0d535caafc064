//! # Observability & Tracing
//!
//! Structured-logging setup shared by everything built on this crate.
//!
//! The store and the HTTP remote log with the `tracing` crate: `debug!` when
//! an operation starts (with full payloads), `info!` when a local mutation
//! is applied, `warn!` when a remote call fails. Log fields carry the short
//! entity type name so lines stay readable without module paths.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # compact operation log
//! RUST_LOG=debug cargo run     # full payloads and per-request URLs
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
