use chrono::Local;
use clap::Parser;
use labelgen::utils::{logger, validation::Validate};
use labelgen::{CliConfig, LabelEngine, LabelPipeline, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting labelgen CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = LabelPipeline::new(storage, config);
    let engine = LabelEngine::new(pipeline);

    match engine.run(Local::now()).await {
        Ok(written) => {
            tracing::info!("✅ Label generation completed");
            println!("✅ Label generation completed");
            for path in &written {
                println!("📁 {}", path);
            }
        }
        Err(e) => {
            tracing::error!("❌ Label generation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
