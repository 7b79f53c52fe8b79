use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr tracing subscriber shared by both binaries.
///
/// `RUST_LOG` wins when set; otherwise the crate logs at warn, or debug with `verbose`.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "transcript_fetch=debug"
    } else {
        "transcript_fetch=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Format an offset in seconds as `HH:MM:SS<sep>mmm`
pub fn format_timestamp(seconds: f64, millis_separator: char) -> String {
    let total_millis = (seconds.max(0.0) * 1000.0).round() as u64;
    let hours = total_millis / 3_600_000;
    let minutes = (total_millis % 3_600_000) / 60_000;
    let secs = (total_millis % 60_000) / 1000;
    let millis = total_millis % 1000;

    format!(
        "{:02}:{:02}:{:02}{}{:03}",
        hours, minutes, secs, millis_separator, millis
    )
}
