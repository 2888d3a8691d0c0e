use std::time::Duration;

use async_trait::async_trait;
use reelbot_core::error::TransportError;
use reelbot_core::transport::{ChatId, IncomingUpdate, Messenger, UpdateSource};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use super::models::{
    ApiResponse, GetUpdatesParams, SendMessageParams, SendVideoParams, Update, User,
};

const ALLOWED_UPDATES: &[&str] = &["message"];

/// JSON-over-HTTPS Bot API client.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    base: String,
    request_timeout: Duration,
}

impl TelegramClient {
    pub fn new(api_base_url: &str, token: &str, request_timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base: format!("{}/bot{}", api_base_url.trim_end_matches('/'), token),
            request_timeout,
        })
    }

    pub async fn get_me(&self) -> Result<User, TransportError> {
        self.call("getMe", &serde_json::json!({}), Duration::ZERO)
            .await
    }

    async fn call<P, T>(&self, method: &str, params: &P, wait: Duration) -> Result<T, TransportError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        // reqwest puts the url (and so the token) into its error text
        let resp = self
            .http
            .post(format!("{}/{}", self.base, method))
            .timeout(self.request_timeout.saturating_add(wait))
            .json(params)
            .send()
            .await
            .map_err(|e| TransportError::Http(e.without_url().into()))?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| TransportError::Http(e.without_url().into()))?;

        let parsed: ApiResponse<T> = serde_json::from_slice(&body).map_err(|e| {
            TransportError::Decode(
                anyhow::Error::new(e).context(format!("{method} returned HTTP {status}")),
            )
        })?;

        if !parsed.ok {
            return Err(TransportError::Api {
                code: parsed.error_code.unwrap_or(i64::from(status.as_u16())),
                description: parsed.description.unwrap_or_default(),
                retry_after: parsed.parameters.and_then(|p| p.retry_after),
            });
        }

        parsed.result.ok_or_else(|| {
            TransportError::Decode(anyhow::anyhow!("{method} returned ok without a result"))
        })
    }
}

#[async_trait]
impl Messenger for TelegramClient {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), TransportError> {
        let _: IgnoredAny = self
            .call("sendMessage", &SendMessageParams { chat_id, text }, Duration::ZERO)
            .await?;
        tracing::debug!(target: "reelbot.telegram", chat_id, "sendMessage ok");
        Ok(())
    }

    async fn send_video(
        &self,
        chat_id: ChatId,
        file_id: &str,
        caption: &str,
    ) -> Result<(), TransportError> {
        let params = SendVideoParams {
            chat_id,
            video: file_id,
            caption,
        };
        let _: IgnoredAny = self.call("sendVideo", &params, Duration::ZERO).await?;
        tracing::debug!(target: "reelbot.telegram", chat_id, "sendVideo ok");
        Ok(())
    }
}

#[async_trait]
impl UpdateSource for TelegramClient {
    async fn poll_updates(
        &self,
        offset: Option<i64>,
        timeout: Duration,
    ) -> Result<Vec<IncomingUpdate>, TransportError> {
        let params = GetUpdatesParams {
            offset,
            timeout: timeout.as_secs(),
            allowed_updates: ALLOWED_UPDATES,
        };
        let updates: Vec<Update> = self.call("getUpdates", &params, timeout).await?;
        if !updates.is_empty() {
            tracing::debug!(
                target: "reelbot.telegram",
                count = updates.len(),
                "getUpdates returned updates"
            );
        }
        Ok(updates.into_iter().map(IncomingUpdate::from).collect())
    }
}
