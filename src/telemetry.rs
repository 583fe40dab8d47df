use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "hermes=info,aws_config=warn,aws_smithy_runtime=warn,sqlx=warn";

/// Installs the global fmt subscriber. `RUST_LOG` overrides the default filter. Output is
/// uncoloured because CloudWatch stores it verbatim.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .without_time()
        .init();
}
