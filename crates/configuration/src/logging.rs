use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global `tracing` subscriber for a binary.
///
/// Verbosity defaults to `info` and can be changed through `RUST_LOG`. Output goes
/// to stderr so it never mixes with reports printed on stdout.
pub fn init() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
