use clap::Parser;
use coin_snapshot::cli::{Cli, Commands};
use coin_snapshot::config::Config;
use coin_snapshot::fetch::historical_url;
use coin_snapshot::snapshot::{date, SnapshotCache, SnapshotPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    let _telemetry = coin_snapshot::telemetry::init_telemetry(&config.telemetry)?;

    let snapshot_date = cli.snapshot_date();

    let result = match &cli.command {
        Commands::Show(args) => {
            tracing::info!(date = %snapshot_date, "Showing snapshot");
            let cache = SnapshotCache::new(SnapshotPipeline::from_config(&config.source)?);
            args.execute(&cache, &config, snapshot_date).await
        }
        Commands::Export(args) => {
            tracing::info!(date = %snapshot_date, "Exporting snapshot");
            let cache = SnapshotCache::new(SnapshotPipeline::from_config(&config.source)?);
            args.execute(&cache, &config, snapshot_date).await
        }
        Commands::Date => {
            println!("Snapshot date: {}", snapshot_date);
            println!("Date since last update: {}", date::display(snapshot_date));
            println!(
                "URL: {}",
                historical_url(&config.source.base_url, snapshot_date)
            );
            Ok(())
        }
        Commands::Config => {
            println!("Current configuration:");
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Command failed");
    }

    result
}
