use clap::Parser;
use small_utils::core::table;
use small_utils::utils::{logger, validation::Validate};
use small_utils::{async_fetch, is_palindrome, CliConfig, LocalStorage, User};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-utils demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!(
        "Palindrome check: {:?} -> {}",
        config.phrase,
        is_palindrome(&config.phrase)
    );

    let storage = LocalStorage::new(config.output_path.clone());
    let rows = vec![
        vec!["id".to_string(), "name".to_string()],
        vec!["1".to_string(), "alice".to_string()],
        vec!["2".to_string(), "bob".to_string()],
    ];

    table::write_csv(&storage, &config.csv_name, &rows).await?;
    let restored = table::read_csv(&storage, &config.csv_name).await?;
    tracing::info!(
        "CSV round-trip through {}: {} rows back",
        config.csv_name,
        restored.len()
    );

    let fetched = async_fetch("demo").await;
    tracing::info!("Async fetch returned: {}", fetched);

    let user = User::new("alice").with_attr("admin", true);
    tracing::debug!("Sample user: {}", user.to_json()?);

    println!("✅ Demo completed");
    println!("📁 Output saved to: {}/{}", config.output_path, config.csv_name);

    Ok(())
}
