use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber, writing compact events to stderr.
///
/// `RUST_LOG` wins when set; otherwise the level follows the `-v` count:
/// warn by default, debug with `-v`, trace with `-vv`.
pub fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}
