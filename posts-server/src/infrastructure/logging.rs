use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// `RUST_LOG` wins over the configured level; an unparseable level falls back
/// to `info` and is reported once the subscriber is up.
pub(crate) fn init_logging(default_level: &str) -> Result<()> {
    let (filter, rejected) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => match EnvFilter::try_new(default_level) {
            Ok(filter) => (filter, None),
            Err(_) => (EnvFilter::new("info"), Some(default_level)),
        },
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    if let Some(level) = rejected {
        tracing::warn!(requested = level, "invalid log level, falling back to info");
    }
    Ok(())
}
