use clap::Parser;
use vaccine_finder::core::ConfigProvider;
use vaccine_finder::utils::{logger, validation::Validate};
use vaccine_finder::{CliArgs, HttpFeedClient, SearchConfig, SearchEngine, TracingReporter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 參數錯誤時 clap 會印出 usage 並以非零碼結束
    let args = CliArgs::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting vaccine-finder");

    let config = match SearchConfig::from_file(&args.config).and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Error reading configuration: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    tracing::info!("✅ Configuration loaded");
    tracing::info!("  feeds: {:?}", config.feed_urls());
    tracing::info!("  add_uuid_parameter: {}", config.add_uuid_parameter);
    tracing::info!(
        "  search point: lat {}, lon {}",
        config.search_latitude,
        config.search_longitude
    );
    tracing::info!("  nearest to report: {}", config.num_nearest_locations_to_log);
    tracing::info!("  filter_provider: {:?}", config.filter_provider);
    tracing::info!("  filter_distance_miles: {}", config.filter_distance_miles);

    let client = HttpFeedClient::new(config.add_uuid_parameter(), config.request_timeout())?;
    let engine = SearchEngine::new(client, config, TracingReporter::new());

    if let Err(e) = engine.run().await {
        tracing::error!("❌ Search failed: {} (Category: {:?})", e, e.category());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}
