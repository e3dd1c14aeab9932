use anyhow::Context;
use clap::Parser;
use coffee_dispenser::utils::error::ErrorSeverity;
use coffee_dispenser::utils::{logger, validation::Validate};
use coffee_dispenser::{CliConfig, CoffeeStation, Dispenser, DispenserError, FileReport, Stock};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    // 初始化日誌
    if config.json_logs() {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::info!("🚀 Starting coffee-dispenser");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        exit_with(&e);
    }

    let stock = config.initial_stock();
    tracing::info!("📦 Initial stock - {}", stock);
    tracing::info!("📁 Report file: {}", config.report_path());

    let report = FileReport::new(config.report_path());
    let mut station = CoffeeStation::with_dispenser(Dispenser::with_stock(stock), report);

    if cli.orders.is_empty() {
        tracing::warn!("No orders given, nothing to serve");
    }

    for order in &cli.orders {
        match station.serve(order.size, order.sugar_spoons) {
            Ok(outcome) => println!("{}", outcome),
            Err(e) => {
                tracing::error!(
                    "❌ Order {} failed: {} (Category: {:?}, Severity: {:?})",
                    order,
                    e,
                    e.category(),
                    e.severity()
                );
                exit_with(&e);
            }
        }
    }

    print_summary(station.stock(), cli.json)?;
    Ok(())
}

fn print_summary(stock: Stock, json: bool) -> anyhow::Result<()> {
    if json {
        let summary = serde_json::to_string_pretty(&stock).context("Failed to render stock summary")?;
        println!("{}", summary);
    } else {
        println!("📦 Remaining stock - {}", stock);
    }
    Ok(())
}

fn exit_with(e: &DispenserError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
