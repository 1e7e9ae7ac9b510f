//! Terminal demo: walks a holder through a generated world and prints what
//! the compass shows.
mod app;
mod config;
mod dirs;
mod world;

use anyhow::Result;
use app::DemoApp;
use config::CliConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "compass.log";

fn main() -> Result<()> {
    // `.env` is optional.
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    setup_logging(config.session_id.as_deref())?;

    DemoApp::new(config)?.run()
}

/// Routes `tracing` output to `compass.log` in this run's log directory.
///
/// Stdout carries the demo frames, so nothing is logged to the terminal.
/// `RUST_LOG` narrows or widens the default `info` level.
fn setup_logging(session_id: Option<&str>) -> Result<()> {
    let session = dirs::session_log_dir(session_id)?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&session.path, LOG_FILE));
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    // The process exits right after the demo; keep the writer thread alive
    // until then.
    std::mem::forget(guard);

    tracing::info!(
        session = %session.id,
        file = %session.path.join(LOG_FILE).display(),
        "logging to file"
    );
    Ok(())
}
