//! Core of reelbot: a chat bot that answers `/video` with a random clip from a fixed catalog.
//!
//! The transport lives behind the traits in [`transport`]; everything here can be
//! driven with in-memory fakes.

pub mod app;
pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod polling;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use app::{read_token, run_bot, TOKEN_ENV};
pub use catalog::Catalog;
pub use config::AppConfig;
pub use dispatch::{BotCommand, CommandEvent, Dispatcher, HandlerOutcome};
pub use error::{BotError, CatalogError, ConfigError, TransportError};
pub use polling::Poller;
pub use transport::{ChatId, IncomingUpdate, Messenger, Transport, TransportFactory, UpdateSource};
