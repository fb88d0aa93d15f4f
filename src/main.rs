use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use sparkline24::commands;
use sparkline24::config::SparklineConfig;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "sparkline24=info".parse::<tracing_subscriber::filter::Directive>() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = match SparklineConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(2);
        }
    };
    info!(
        "Sparkline config: {} points, {}x{}, output dir {}",
        config.point_count,
        config.width,
        config.height,
        config.output_dir.display()
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let parts: Vec<&str> = args.iter().map(String::as_str).collect();

    if let Err(e) = commands::handle_args(&config, &parts).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
