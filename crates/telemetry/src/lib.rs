//! Logging and tracing bootstrap for StayFinder.

use tracing_subscriber::EnvFilter;

use stayfinder_kernel::settings::{LogFormat, TelemetrySettings};

/// Initialize the tracing pipeline according to telemetry settings.
///
/// `RUST_LOG` overrides the default `info` filter. Safe to call once per
/// process; a second call returns an error from the global subscriber.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match settings.log_format {
        LogFormat::Pretty => builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?,
        LogFormat::Json => builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?,
    }

    tracing::debug!(
        target: "stayfinder-telemetry",
        format = ?settings.log_format,
        "telemetry initialized"
    );

    Ok(())
}
