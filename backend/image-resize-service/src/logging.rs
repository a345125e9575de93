use tracing_subscriber::{fmt, EnvFilter};

/// JSON lines for CloudWatch; the log stream already carries timestamps
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,aws_config=warn,aws_smithy_runtime=warn"));

    fmt()
        .json()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .init();
}
