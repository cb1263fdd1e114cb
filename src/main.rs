use clap::Parser;
use color_finder::utils::error::ErrorCategory;
use color_finder::utils::{logger, validation::Validate};
use color_finder::{CliConfig, ColorFinder, FinderError};

fn exit_code(e: &FinderError) -> i32 {
    match e.category() {
        ErrorCategory::Config | ErrorCategory::Io => 1,
        ErrorCategory::Fetch => 2,
        ErrorCategory::Parse => 3,
    }
}

fn report(e: &FinderError) -> ! {
    tracing::error!("❌ color-finder failed: {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(exit_code(e));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting color-finder");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let (config, criteria) = match cli.resolve() {
        Ok(resolved) => resolved,
        Err(e) => report(&e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        report(&e);
    }

    let finder = match ColorFinder::from_config(&config) {
        Ok(finder) => finder,
        Err(e) => report(&e),
    };

    let found = match finder.search(&criteria).await {
        Ok(found) => found,
        Err(e) => report(&e),
    };

    if found.is_empty() {
        tracing::info!("No colors matched the given criteria");
    }

    let output = if cli.pretty {
        serde_json::to_string_pretty(&found)?
    } else {
        serde_json::to_string(&found)?
    };
    println!("{}", output);

    Ok(())
}
