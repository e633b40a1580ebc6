use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use new_titles::{
    cli::Cli,
    config::Config,
    services::{
        DiscordNotifier, HttpTransport, JustWatchProvider, NotifyOutcome, Pipeline,
        ServiceNormalizer,
    },
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let today = Local::now().date_naive();

    let catalog_transport = Arc::new(HttpTransport::with_options(
        config.catalog_verify_tls,
        config.catalog_proxy.as_deref(),
    )?);
    let provider = Arc::new(JustWatchProvider::new(
        catalog_transport,
        config.catalog_api_url.clone(),
    ));
    let notifier = DiscordNotifier::new(
        Arc::new(HttpTransport::new()),
        config.webhook_url().map(str::to_string),
    );

    let pipeline = Pipeline::new(
        provider,
        ServiceNormalizer::default(),
        notifier,
        PathBuf::from(&config.output_dir),
        today,
    );

    let report = match &cli.file {
        Some(path) => {
            println!("Loading from {}...", path.display());
            pipeline.run_replay(path).await?
        }
        None => {
            println!("Fetching new titles from JustWatch...");
            let params = cli.fetch_params(&config, today);
            let report = pipeline.run_live(&params).await?;
            if let Some(artifact) = &report.artifact {
                println!("Saved {} titles to {}", report.records, artifact.display());
            }
            report
        }
    };

    println!("\n{}", report.summary());

    match &report.notification {
        NotifyOutcome::Skipped => println!("No titles to send"),
        NotifyOutcome::Delivered { total } => println!("✓ Sent combined embed ({} titles)", total),
        NotifyOutcome::Failed { status, reason } => match status {
            Some(status) => println!("✗ Failed to send: {} - {}", status, reason),
            None => println!("✗ Failed to send: {}", reason),
        },
    }

    println!("Done!");
    Ok(())
}
