// File: crates/candle-chart/src/telemetry.rs
// Summary: Opt-in tracing subscriber setup for binaries embedding the renderer.

/// Installs a compact `tracing` fmt subscriber filtered by `RUST_LOG` (default `info`)
/// when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is off or a global subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
