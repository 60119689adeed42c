use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use log_analyzer::error::AppResult;

/// Env var checked before `RUST_LOG` for the log filter.
const LOG_FILTER_ENV: &str = "LOG_ANALYZER_LOG";

fn build_filter(verbose: bool) -> EnvFilter {
    std::env::var(LOG_FILTER_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| {
                if verbose {
                    EnvFilter::new("debug")
                } else {
                    EnvFilter::new("info")
                }
            },
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        )
}

/// Installs the global subscriber, writing to `log_file` when set and to
/// stderr otherwise.
///
/// # Errors
///
/// Returns an error when the log file cannot be created.
pub(crate) fn init_logging(
    verbose: bool,
    no_color: bool,
    log_file: Option<&Path>,
) -> AppResult<()> {
    let filter = build_filter(verbose);

    let installed = if let Some(path) = log_file {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(!no_color)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    };

    if let Err(err) = installed {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
    Ok(())
}
