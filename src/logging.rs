use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log to stderr so rendered output on stdout stays clean.
pub fn init(verbose: bool) {
    let default = if verbose {
        "monthgrid=debug,monthgrid_core=debug"
    } else {
        "monthgrid=warn,monthgrid_core=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
