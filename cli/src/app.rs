use reelbot_core::config::{self, AppConfig};
use reelbot_core::error::BotError;
use reelbot_plugins::TelegramTransportFactory;

use crate::commands::cli::Args;

pub async fn run_app(args: Args) -> Result<(), BotError> {
    let cfg = resolve_config(&args)?;
    tracing::debug!(
        target: "reelbot.app",
        catalog = %cfg.catalog.path,
        interval_ms = cfg.polling.interval_ms,
        "config resolved"
    );

    reelbot_core::run_bot(
        cfg,
        reelbot_core::read_token(),
        &TelegramTransportFactory,
        shutdown_signal(),
    )
    .await
}

fn resolve_config(args: &Args) -> Result<AppConfig, BotError> {
    let mut cfg = match args.config.as_deref() {
        Some(path) => config::load_from(Some(path))?,
        None => config::load_default()?,
    };

    // CLI flags win over file and env
    if let Some(path) = &args.run.catalog {
        cfg.catalog.path = path.clone();
    }
    if let Some(ms) = args.run.poll_interval_ms {
        cfg.polling.interval_ms = ms;
    }
    Ok(cfg)
}

async fn shutdown_signal() {
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!(target: "reelbot.app", "received Ctrl+C, shutting down");
        }
        _ = wait_for_sigterm() => {
            tracing::info!(target: "reelbot.app", "received SIGTERM, shutting down");
        }
    }
}

#[cfg(unix)]
async fn wait_for_sigterm() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sig) => {
            sig.recv().await;
        }
        Err(e) => {
            tracing::warn!(target: "reelbot.app", error = %e, "cannot listen for SIGTERM");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_sigterm() {
    std::future::pending::<()>().await;
}
