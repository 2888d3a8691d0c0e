//! Routes incoming updates to the `/start` and `/video` handlers.

pub mod command;
pub mod handlers;

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::MessagesConfig;
use crate::error::TransportError;
use crate::transport::{IncomingUpdate, Messenger};

pub use command::{parse_command, BotCommand, CommandEvent};
pub use handlers::{log_preview, HandlerOutcome};

pub struct Dispatcher {
    catalog: Arc<Catalog>,
    messenger: Arc<dyn Messenger>,
    messages: MessagesConfig,
    bot_username: Option<String>,
}

impl Dispatcher {
    pub fn new(
        catalog: Arc<Catalog>,
        messenger: Arc<dyn Messenger>,
        messages: MessagesConfig,
    ) -> Self {
        Self {
            catalog,
            messenger,
            messages,
            bot_username: None,
        }
    }

    pub fn with_bot_username(mut self, username: Option<String>) -> Self {
        self.bot_username = username;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub async fn dispatch(&self, update: &IncomingUpdate) -> Result<HandlerOutcome, TransportError> {
        match CommandEvent::from_update(update, self.bot_username.as_deref()) {
            Some(event) => self.handle(&event).await,
            None => {
                tracing::debug!(
                    target: "reelbot.dispatch",
                    update_id = update.update_id,
                    "update is not a known command, skipping"
                );
                Ok(HandlerOutcome::Ignored)
            }
        }
    }

    pub async fn handle(&self, event: &CommandEvent) -> Result<HandlerOutcome, TransportError> {
        tracing::debug!(
            target: "reelbot.dispatch",
            chat_id = event.chat_id,
            command = event.command.name(),
            "handling command"
        );
        match event.command {
            BotCommand::Start => {
                handlers::start(self.messenger.as_ref(), &self.messages, event.chat_id).await
            }
            BotCommand::Video => {
                handlers::video(
                    self.messenger.as_ref(),
                    &self.catalog,
                    &self.messages,
                    event.chat_id,
                )
                .await
            }
        }
    }
}
