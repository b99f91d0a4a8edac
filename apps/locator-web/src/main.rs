use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = locator_web::Args::parse();
	locator_web::run(args).await
}
