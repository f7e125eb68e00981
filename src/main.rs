use clap::Parser;
use green_savings::utils::{logger, validation::Validate};
use green_savings::{CliConfig, LocalStorage, SavingsEngine, SavingsPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting green-savings CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if let Err(e) = config.resolve_scenario() {
        tracing::error!("Scenario resolution failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("System monitoring enabled");
    }

    let storage = LocalStorage::new(config.data_path.clone());
    let pipeline = SavingsPipeline::new(storage, config);

    let engine = SavingsEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("Savings estimation completed successfully");
            println!("Results successfully saved to '{}'", output_path);
        }
        Err(e) => {
            tracing::error!(
                "Savings estimation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                green_savings::utils::error::ErrorSeverity::Low => 0,
                green_savings::utils::error::ErrorSeverity::Medium => 2,
                green_savings::utils::error::ErrorSeverity::High => 1,
                green_savings::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
