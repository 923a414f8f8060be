//! Log output for hosts that embed the line chart.
//!
//! The chart only emits `tracing` events: series ingestion and rejections
//! from `LineChart::set_series`, plus per-pass render events. Nothing is
//! printed until a subscriber exists, either the one installed by
//! `init_default_tracing` or one owned by the host.

/// Installs a compact fmt subscriber tagged with event targets.
///
/// Needs the `telemetry` feature. The filter comes from `RUST_LOG`, e.g.
/// `RUST_LOG=physlog_chart=debug`, and defaults to `info`. Returns `false`
/// without the feature or when the host already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
