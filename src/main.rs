use clap::Parser;
use clinic_timesaver::config::file::FileConfig;
use clinic_timesaver::utils::{logger, validation::Validate};
use clinic_timesaver::{
    CliConfig, ClinicPipeline, LocalStorage, RemoteInsights, ReportEngine, Resolver,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting clinic-timesaver CLI");

    if let Some(path) = config.config.clone() {
        match FileConfig::from_file(&path) {
            Ok(file) => config = config.merged_with(file),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                std::process::exit(1);
            }
        }
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // Credential is read once here; without it the remote path stays disabled
    // for the lifetime of the process.
    let remote = RemoteInsights::from_env(&config.api_base, &config.model);
    if remote.is_some() {
        tracing::info!("🔑 Remote insights enabled");
    } else {
        tracing::info!("Remote insights disabled (no credential), using fallback estimates");
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let resolver = Resolver::new(remote);
    let action = config.action;
    let pipeline = ClinicPipeline::new(storage, config, resolver);
    let engine = ReportEngine::new(pipeline);

    match engine.run().await {
        Ok((report, output_path)) => {
            println!("AI Clinic Time-Saver");
            println!("====================");
            if let Some(notice) = &report.notice {
                println!("⚠️  {}", notice);
            }
            for line in &report.summary {
                println!("{}", line);
            }
            println!();
            println!("Visualized Savings");
            println!("{}", report.chart);
            println!();
            println!("✅ PDF report saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Report generation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    if let Some(action) = action {
        println!("{}", action.confirmation());
    }

    Ok(())
}
