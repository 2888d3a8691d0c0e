//! Subset of the Bot API wire format the bot actually touches.

use reelbot_core::transport::IncomingUpdate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub error_code: Option<i64>,
    pub description: Option<String>,
    pub parameters: Option<ResponseParameters>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseParameters {
    pub retry_after: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

impl From<Update> for IncomingUpdate {
    fn from(u: Update) -> Self {
        let (chat_id, text) = match u.message {
            Some(m) => (Some(m.chat.id), m.text),
            None => (None, None),
        };
        IncomingUpdate {
            update_id: u.update_id,
            chat_id,
            text,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetUpdatesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    pub timeout: u64,
    pub allowed_updates: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct SendMessageParams<'a> {
    pub chat_id: i64,
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SendVideoParams<'a> {
    pub chat_id: i64,
    pub video: &'a str,
    pub caption: &'a str,
}
