//! Transport plugins for reelbot.

pub mod factory;
pub mod telegram;

pub use factory::TelegramTransportFactory;
pub use telegram::TelegramClient;
