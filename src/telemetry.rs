//! Telemetry helpers for applications embedding `fit-chart-rs`.
//!
//! The engine only emits `tracing` events; installing a subscriber is left
//! to the host. The helpers here are a convenience for small tools and demos
//! that want readable recompute-pass logs without wiring their own filters.

/// Default filter directive used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a compact subscriber filtered by `RUST_LOG`, or by `DEFAULT_FILTER`
/// when the variable is absent or malformed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER)
}

/// Installs a compact subscriber filtered by `RUST_LOG`, falling back to
/// `fallback_directive` (for example `"fit_chart=trace"`).
///
/// Returns `false` when the `telemetry` feature is disabled or when the host
/// already set a global subscriber.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback_directive))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
