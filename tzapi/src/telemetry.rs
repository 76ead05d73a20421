//! Telemetry initialization (tracing with a console fmt subscriber).
//!
//! Log filtering follows the standard `RUST_LOG` conventions, defaulting to
//! `info` when the variable is unset:
//!
//! ```bash
//! RUST_LOG=tzapi=debug,tower_http=debug tzapi
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize tracing with console output
pub fn init_telemetry() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    info!("Telemetry initialized");

    Ok(())
}
