use idiots_live::config::Config;
use idiots_live::site;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// One-shot build: fetch the live list and regenerate the static output.
/// A failed fetch fails the whole run, leaving any previous output alone.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let summary = site::build(&config).await?;
    info!(
        "Built {} with {} lives ({} completed)",
        summary.output.display(),
        summary.total,
        summary.completed
    );

    Ok(())
}
