use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// Diagnostics go to stderr, stdout only carries the GPU report
pub fn init_logging() {
    let level = if cfg!(debug_assertions) { "debug" } else { "warn" };

    let filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => {
            info!("\"RUST_LOG\" variable not set, defaulting to {level}");
            EnvFilter::new(level)
        }
    };

    let fmt_layer = fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .init();
}
