//! Opt-in tracing setup for hosts embedding the editor.
//!
//! The engine itself only emits `tracing` events (drag lifecycle, render
//! passes, rejected input). Hosts that do not install a subscriber pay
//! nothing; small tools and demos can call [`init_default_tracing`] instead
//! of wiring their own.

/// Installs a compact default `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` when set and otherwise enables `info`
/// globally with `debug` for this crate, which covers the engine's own
/// drag and render events.
///
/// Returns `true` on success, `false` when the `telemetry` feature is off or
/// a global subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,chartedit=debug"));

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
