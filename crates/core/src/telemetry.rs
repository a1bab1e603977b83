use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_DIRECTIVES: &str =
    "dynamocards=info,dynamocards_core=info,dynamocards_desktop=info";

/// Install the stderr log subscriber, honoring `RUST_LOG` when it is set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES));

    // A subscriber may already be installed (tests, embedding apps).
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
