use std::future::Future;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::dispatch::Dispatcher;
use crate::error::{BotError, ConfigError};
use crate::polling::Poller;
use crate::transport::TransportFactory;

pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Bot token from the environment; blank counts as unset.
pub fn read_token() -> Option<String> {
    std::env::var(TOKEN_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Loads the catalog, connects the transport and polls until `shutdown` resolves.
///
/// Without a token nothing is connected and `Ok(())` is returned right away.
pub async fn run_bot<F>(
    cfg: AppConfig,
    token: Option<String>,
    factory: &dyn TransportFactory,
    shutdown: F,
) -> Result<(), BotError>
where
    F: Future<Output = ()>,
{
    let catalog = Arc::new(Catalog::load(&cfg.catalog.path)?);

    let Some(token) = token else {
        let err = ConfigError::MissingToken { var: TOKEN_ENV };
        tracing::error!(target: "reelbot.app", "{err}, bot cannot start");
        return Ok(());
    };

    let transport = factory.build(&cfg, &token).await?;
    match &transport.bot_username {
        Some(name) => tracing::info!(target: "reelbot.app", "connected as @{name}"),
        None => tracing::info!(target: "reelbot.app", "connected"),
    }

    let dispatcher = Dispatcher::new(catalog, transport.messenger, cfg.messages.clone())
        .with_bot_username(transport.bot_username);
    Poller::new(transport.updates, dispatcher, &cfg.polling)
        .run(shutdown)
        .await;

    Ok(())
}
