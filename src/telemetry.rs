//! Telemetry helpers for tools embedding `chart-export`.
//!
//! Tracing setup stays explicit and opt-in: call `init_default_tracing` from a
//! binary, or install your own `tracing` subscriber and filters instead.

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`, falling back
/// to `info`. Only active with the `telemetry` feature.
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
