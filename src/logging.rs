use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Send diagnostics to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!cfg!(windows))
        .with_target(false);

    let collector = tracing_subscriber::registry().with(filter).with(console_layer);
    tracing::subscriber::set_global_default(collector)?;

    if let Ok(var) = std::env::var("RUST_LOG") {
        tracing::debug!("Logging initiated with RUST_LOG=\"{}\"", var);
    }
    Ok(())
}
