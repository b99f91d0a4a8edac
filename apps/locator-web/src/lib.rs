pub mod routes;
pub mod state;
pub mod view;

use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;
use color_eyre::eyre;
use locator_config::Security;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(
	version = locator_cli::VERSION,
	about = locator_cli::ABOUT,
	rename_all = "kebab",
	styles = locator_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = locator_config::load(&args.config)?;
	init_tracing(&config);
	let http_addr: SocketAddr = config.service.http_bind.parse()?;
	check_bind(http_addr, &config.security)?;
	let state = AppState::new(&config)?;
	let app = routes::router(state);

	let http_listener = TcpListener::bind(http_addr).await?;
	tracing::info!(%http_addr, search_url = %config.search.api_base, "HTTP server listening.");
	axum::serve(http_listener, app).await?;

	Ok(())
}

/// Refuses non-loopback binds unless `security.bind_localhost_only` is off.
pub fn check_bind(addr: SocketAddr, security: &Security) -> color_eyre::Result<()> {
	if security.bind_localhost_only && !addr.ip().is_loopback() {
		return Err(eyre::eyre!(
			"http_bind must be a loopback address when bind_localhost_only is true."
		));
	}

	Ok(())
}

fn init_tracing(config: &locator_config::Config) {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).init();
}
