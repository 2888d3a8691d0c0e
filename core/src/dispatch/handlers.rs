use crate::catalog::Catalog;
use crate::config::MessagesConfig;
use crate::error::TransportError;
use crate::transport::{ChatId, Messenger};

/// What a handler ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerOutcome {
    Replied,
    SentVideo { file_id: String },
    Ignored,
}

const LOG_ID_CHARS: usize = 10;

/// First few characters of a file id, for log lines.
pub fn log_preview(file_id: &str) -> String {
    let head: String = file_id.chars().take(LOG_ID_CHARS).collect();
    format!("{head}...")
}

pub(crate) async fn start(
    messenger: &dyn Messenger,
    messages: &MessagesConfig,
    chat_id: ChatId,
) -> Result<HandlerOutcome, TransportError> {
    messenger.send_text(chat_id, &messages.welcome).await?;
    Ok(HandlerOutcome::Replied)
}

pub(crate) async fn video(
    messenger: &dyn Messenger,
    catalog: &Catalog,
    messages: &MessagesConfig,
    chat_id: ChatId,
) -> Result<HandlerOutcome, TransportError> {
    // ThreadRng is !Send, keep it out of the await points
    let picked = {
        let mut rng = rand::thread_rng();
        catalog.pick(&mut rng).map(str::to_owned)
    };

    let Some(file_id) = picked else {
        messenger.send_text(chat_id, &messages.no_videos).await?;
        return Ok(HandlerOutcome::Replied);
    };

    messenger
        .send_video(chat_id, &file_id, &messages.video_caption)
        .await?;
    tracing::info!(
        target: "reelbot.dispatch",
        chat_id,
        file_id = %log_preview(&file_id),
        "sent video"
    );
    Ok(HandlerOutcome::SentVideo { file_id })
}
