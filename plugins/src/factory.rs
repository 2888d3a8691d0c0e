use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reelbot_core::config::AppConfig;
use reelbot_core::error::TransportError;
use reelbot_core::transport::{Transport, TransportFactory};

use crate::telegram::TelegramClient;

/// Builds a Bot API client and checks the token with `getMe` before polling starts.
#[derive(Debug, Default, Clone, Copy)]
pub struct TelegramTransportFactory;

#[async_trait]
impl TransportFactory for TelegramTransportFactory {
    async fn build(&self, cfg: &AppConfig, token: &str) -> Result<Transport, TransportError> {
        let client = TelegramClient::new(
            &cfg.telegram.api_base_url,
            token,
            Duration::from_millis(cfg.telegram.request_timeout_ms),
        )
        .map_err(TransportError::Http)?;

        let me = client.get_me().await?;
        tracing::debug!(target: "reelbot.telegram", bot_id = me.id, "token accepted");

        Ok(Transport {
            messenger: Arc::new(client.clone()),
            updates: Box::new(client),
            bot_username: me.username,
        })
    }
}
