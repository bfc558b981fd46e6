use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` wins over everything. Otherwise `-v` flags pick the level, and
/// without them the settings file directive (or `warn`) applies.
pub fn init(verbose: u8, configured: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| fallback_filter(&default_directive(verbose, configured)));

    // a subscriber may already be installed, e.g. by a host application
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Unparseable directives, e.g. a typo in the settings file, fall back to `warn`.
pub fn fallback_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"))
}

pub fn default_directive(verbose: u8, configured: Option<&str>) -> String {
    match (verbose, configured) {
        (0, Some(directive)) if !directive.trim().is_empty() => directive.trim().to_string(),
        (0, _) => "warn".to_string(),
        (1, _) => "info".to_string(),
        (2, _) => "debug".to_string(),
        _ => "trace".to_string(),
    }
}
