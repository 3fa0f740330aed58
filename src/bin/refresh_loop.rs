use idiots_live::config::Config;
use idiots_live::site;
use tokio::time::{Duration, sleep};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Rebuilds the static output on the revalidation cadence. A failed cycle
/// only logs: the previously written output stays published until the next
/// successful run.
#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Regenerating every {}s", config.revalidate_secs);

    loop {
        match site::build(&config).await {
            Ok(summary) => info!(
                "Built {} with {} lives ({} completed)",
                summary.output.display(),
                summary.total,
                summary.completed
            ),
            Err(e) => error!("Build failed, keeping previous output: {:?}", e),
        }
        sleep(Duration::from_secs(config.revalidate_secs)).await;
    }
}
