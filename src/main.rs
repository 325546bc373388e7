use playlist_probe::config::ProbeConfig;
use playlist_probe::prober;

use std::io::Write;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load config first to get log level
    let config = ProbeConfig::load().await?;
    let log_level = config.get_tracing_level()?;

    // stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()
                         .add_directive(format!("playlist_probe={}", log_level.as_str().to_lowercase()).parse()?))
        .init();

    let outcome = prober::run(&config).await;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    outcome.report(&mut out)?;
    out.flush()?;

    Ok(())
}
