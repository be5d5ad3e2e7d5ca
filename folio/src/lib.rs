use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub mod environment;
pub mod page;

/// Installs the global tracing subscriber, writing to stderr and filtered by
/// `RUST_LOG`.
pub fn init_tracing() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .try_init()
        .context("Failed to install tracing subscriber")
}
