use std::sync::Arc;

use super::r#trait::{Messenger, UpdateSource};

/// Telegram chat id; negative for groups and channels.
pub type ChatId = i64;

/// One update as delivered by the event source, before command parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingUpdate {
    pub update_id: i64,
    pub chat_id: Option<ChatId>,
    pub text: Option<String>,
}

/// Everything the bot needs from a connected transport.
pub struct Transport {
    pub messenger: Arc<dyn Messenger>,
    pub updates: Box<dyn UpdateSource>,
    /// Username reported by the platform, used to filter `/cmd@otherbot`.
    pub bot_username: Option<String>,
}
