use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use invest_config::ConfigLoader;
use invest_core::{FeeCollector, Investor};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;

#[derive(Parser)]
#[command(name = "invest-service")]
#[command(about = "Yield-strategy call assembly service", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	#[arg(short, long, value_name = "FILE", default_value = "config/local.toml")]
	config: PathBuf,

	#[arg(long, env = "INVESTOR_LOG_LEVEL", default_value = "info")]
	log_level: String,
}

#[derive(Subcommand)]
enum Commands {
	/// Start the service
	Start,
	/// Validate the configuration file
	Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();

	setup_tracing(&cli.log_level)?;

	match cli.command {
		Some(Commands::Start) | None => start_service(cli).await,
		Some(Commands::Validate) => validate_config(cli).await,
	}
}

async fn start_service(cli: Cli) -> Result<()> {
	info!("Starting investment service");
	info!("Loading configuration from: {:?}", cli.config);

	let config = ConfigLoader::new()
		.with_file(&cli.config)
		.load()
		.await
		.context("Failed to load configuration")?;

	info!("Configuration loaded successfully");
	info!("Service name: {}", config.investor.name);
	info!("HTTP port: {}", config.investor.http_port);

	// The fee receiver was validated at load; a miss here is unreachable.
	let receiver = config
		.fee_receiver()
		.context("Fee configuration is incomplete")?;
	let investor = Arc::new(Investor::new(FeeCollector::new(
		receiver,
		config.investor.fee_rate_bps,
	)));

	let http_port = config.investor.http_port;
	let http_handle =
		tokio::spawn(async move { api::start_http_server(investor, http_port).await });

	let shutdown_signal = setup_shutdown_signal();

	info!("Investment service started successfully");

	shutdown_signal.await;

	info!("Shutdown signal received, stopping service...");

	http_handle.abort();

	info!("Investment service stopped");
	Ok(())
}

async fn validate_config(cli: Cli) -> Result<()> {
	info!("Validating configuration file: {:?}", cli.config);

	let config = ConfigLoader::new()
		.with_file(&cli.config)
		.load()
		.await
		.context("Failed to load configuration")?;

	info!("Configuration is valid");
	info!("Service name: {}", config.investor.name);
	info!("Fee receiver: {}", config.fee_receiver()?);
	info!("Fee rate: {} / 1000", config.investor.fee_rate_bps);
	info!("Registered strategies:");

	for descriptor in invest_registry::catalog() {
		info!(
			"  {} ({} on chain {})",
			descriptor.id, descriptor.protocol.name, descriptor.chain_id
		);
	}

	Ok(())
}

fn setup_tracing(log_level: &str) -> Result<()> {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

	tracing_subscriber::registry()
		.with(env_filter)
		.with(tracing_subscriber::fmt::layer())
		.init();

	Ok(())
}

async fn setup_shutdown_signal() {
	let ctrl_c = async {
		signal::ctrl_c()
			.await
			.expect("failed to install Ctrl+C handler");
	};

	#[cfg(unix)]
	let terminate = async {
		signal::unix::signal(signal::unix::SignalKind::terminate())
			.expect("failed to install signal handler")
			.recv()
			.await;
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => {},
		_ = terminate => {},
	}
}
