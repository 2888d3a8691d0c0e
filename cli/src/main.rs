use clap::Parser;
mod app;
mod commands;
use commands::cli;
use reelbot_core::error::BotError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), BotError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .init();

    let args = cli::Args::parse();
    let result = match args.command {
        Some(cli::Commands::Run) | None => app::run_app(args).await,
    };

    if let Err(e) = result {
        tracing::error!(target: "reelbot.app", error = %e, "bot stopped with an error");
        return Err(e);
    }
    Ok(())
}
