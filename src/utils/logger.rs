use anyhow::Result;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initializes the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_logger() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
