use clap::Parser;
use quake_report::core::report;
use quake_report::utils::{logger, validation::Validate};
use quake_report::{CliConfig, Earthquake, UsgsClient};

fn print_record(record: &Earthquake) {
    let (offset, primary) = report::split_location(&record.location);
    let detail = record
        .detail_url
        .as_ref()
        .map(|url| url.as_str())
        .unwrap_or("-");

    println!(
        "[{:>2}] {:>5}  {} {}  {} {}  {}",
        report::magnitude_band(record.magnitude),
        report::format_magnitude(record.magnitude),
        offset,
        primary,
        report::format_date(record.occurred_at_millis),
        report::format_time(record.occurred_at_millis),
        detail
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting quake-report");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let client = match UsgsClient::new(&config.endpoint) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    match client.fetch(&config).await {
        Ok(records) if records.is_empty() => {
            tracing::info!("Fetch succeeded with zero records");
            println!("No earthquakes found.");
        }
        Ok(records) => {
            tracing::info!("Fetched {} earthquake records", records.len());
            for record in &records {
                print_record(record);
            }
        }
        Err(e) => {
            tracing::error!("Fetch failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
