use anyhow::Context;
use clap::Parser;
use number_classifier::app::server::shutdown_signal;
use number_classifier::core::ConfigProvider;
use number_classifier::utils::{logger, validation::Validate};
use number_classifier::{
    router, serve, CliConfig, FunFactCache, NumberClassifier, NumbersApiClient, TomlConfig,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting number-classifier");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match cli.config.clone() {
        Some(path) => {
            tracing::info!("📄 Loading config from {}", path);
            let config = TomlConfig::from_file(&path)
                .with_context(|| format!("failed to load config file {}", path))?;
            run(config).await
        }
        None => run(cli).await,
    }
}

async fn run<C: ConfigProvider + Validate>(config: C) -> Result<(), Box<dyn std::error::Error>> {
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = NumbersApiClient::new(config.fact_service_url(), config.fact_timeout())?;
    let facts = FunFactCache::with_fallback(
        client,
        config.cache_capacity(),
        config.fact_timeout(),
        config.fact_fallback(),
    );
    let classifier = Arc::new(NumberClassifier::new(facts));

    tracing::info!(
        "Fact service: {} (timeout {:?}, cache capacity {})",
        config.fact_service_url(),
        config.fact_timeout(),
        config.cache_capacity()
    );

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind to {}", address))?;

    serve(listener, router(classifier), shutdown_signal()).await?;

    tracing::info!("✅ Server stopped");
    Ok(())
}
