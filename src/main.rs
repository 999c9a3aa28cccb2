use clap::Parser;
use landmark_locator::app::Server;
use landmark_locator::utils::logger;
use landmark_locator::CliConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    let verbose = cli.verbose;

    let settings = match cli.into_settings() {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(verbose);
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    logger::init_logger(settings.logging.verbose, settings.logging.json);

    tracing::info!("Starting landmark-locator");
    tracing::debug!("Settings: {:?}", settings);

    Server::build(&settings).await?.run().await
}
