use chrono::Utc;
use prusa_sniper::config::load_config;
use prusa_sniper::{analyzer, report, snapshot};
use tracing::{error, info};
use tracing_subscriber;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    // Load configuration from file (path overridable by first argument)
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.json".to_string());
    let config = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    info!("🚀 PrusaSniper started!");
    info!("Fetching snapshot from {}...", config.snapshot);

    // One fetch per run; a failure is an error state, the analyzers never run
    let source = snapshot::for_location(&config.snapshot);
    let raw = match source.fetch().await {
        Ok(raw) => raw,
        Err(e) => {
            error!("Snapshot fetch error: {}", e);
            return;
        }
    };

    let data = match snapshot::parse_snapshot(&raw) {
        Ok(data) => data,
        Err(e) => {
            error!("Snapshot parse error: {}", e);
            return;
        }
    };

    info!("Loaded {} listings", data.listings.len());
    let now = Utc::now();

    info!("Computing model stats...");
    let stats = analyzer::model_stats(&data.listings);

    info!("Classifying upgrades...");
    let upgrade_stats = analyzer::upgrade_stats(&data.listings);

    info!("Finding standout listings...");
    let standouts = analyzer::find_standout_listings(&data.listings);
    let overview = analyzer::overview(&data.listings);

    print!(
        "{}",
        report::render_dashboard(
            &data,
            &stats,
            &upgrade_stats,
            &standouts,
            &overview,
            config.top_deals,
            now,
        )
    );
}
