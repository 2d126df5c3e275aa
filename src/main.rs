use clap::Parser;
use widget_call::adapters::NullDialog;
use widget_call::utils::{ident, logger, validation::Validate};
use widget_call::{CallDispatcher, CallOutcome, CliConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting widget-call");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let (config, payload) = match cli.resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::error!("❌ Failed to resolve configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let name = ident::random_call_name(10);
    let dispatcher = CallDispatcher::new(name, config, NullDialog, payload, |data| {
        println!("{:#}", data);
    });

    match dispatcher.dispatch().await {
        Ok(CallOutcome::Completed { recoveries }) => {
            tracing::info!("✅ Call completed ({} recoveries)", recoveries);
        }
        Ok(CallOutcome::Failed { status }) => {
            eprintln!("❌ Call failed with status {}", status);
            std::process::exit(2);
        }
        Ok(CallOutcome::RecoveryLimitReached { status, recoveries }) => {
            eprintln!(
                "❌ Status {} kept recurring after {} recoveries",
                status, recoveries
            );
            std::process::exit(2);
        }
        Err(e) => {
            tracing::error!("❌ Call errored: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
