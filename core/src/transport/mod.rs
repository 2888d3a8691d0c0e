pub mod r#trait;
pub mod types;

pub use r#trait::{Messenger, TransportFactory, UpdateSource};
pub use types::{ChatId, IncomingUpdate, Transport};
