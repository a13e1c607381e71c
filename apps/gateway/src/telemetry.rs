use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// JSON logs by default; `LOG_FORMAT=pretty` switches to human-readable output.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,actix_web=info,reqwest=warn,hyper_util=warn")
    });

    let pretty = std::env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("pretty"))
        .unwrap_or(false);

    let base = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    if pretty {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(base.pretty())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(base.with_ansi(false).json())
            .init();
    }
}
