use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. `RUST_LOG` wins over `--log`, which wins
/// over [`DEFAULT_FILTER`]. Output goes to stderr so tokens stay on stdout.
pub fn init(directive: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive.unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let layer = fmt::layer()
        .compact()
        .with_target(true)
        .without_time()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry().with(filter).with(layer).init();
}
