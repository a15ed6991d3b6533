use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool, directive: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match directive {
        Some(directive) => EnvFilter::new(directive),
        None if verbose => EnvFilter::new("roman_calc=debug"),
        None => EnvFilter::new("roman_calc=warn"),
    })
}

/// Logs go to stderr; stdout belongs to the calculator.
pub fn init_cli_logger(verbose: bool, directive: Option<&str>) {
    tracing_subscriber::registry()
        .with(default_filter(verbose, directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool, directive: Option<&str>) {
    tracing_subscriber::registry()
        .with(default_filter(verbose, directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
