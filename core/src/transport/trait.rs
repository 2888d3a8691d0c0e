use std::time::Duration;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::error::TransportError;

use super::types::{ChatId, IncomingUpdate, Transport};

#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), TransportError>;

    /// `file_id` refers to media already stored by the platform; no bytes are uploaded.
    async fn send_video(
        &self,
        chat_id: ChatId,
        file_id: &str,
        caption: &str,
    ) -> Result<(), TransportError>;
}

#[async_trait]
pub trait UpdateSource: Send + Sync {
    /// Waits up to `timeout` for updates with `update_id >= offset`.
    ///
    /// Passing an offset acknowledges every earlier update.
    async fn poll_updates(
        &self,
        offset: Option<i64>,
        timeout: Duration,
    ) -> Result<Vec<IncomingUpdate>, TransportError>;
}

#[async_trait]
pub trait TransportFactory: Send + Sync {
    async fn build(&self, cfg: &AppConfig, token: &str) -> Result<Transport, TransportError>;
}
