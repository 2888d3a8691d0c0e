use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::TransportError;
use crate::transport::{ChatId, Messenger};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Sent {
    Text {
        chat_id: ChatId,
        text: String,
    },
    Video {
        chat_id: ChatId,
        file_id: String,
        caption: String,
    },
}

#[derive(Default)]
pub(crate) struct RecordingMessenger {
    sent: Mutex<Vec<Sent>>,
    fail_videos: AtomicBool,
}

impl RecordingMessenger {
    pub(crate) fn failing_videos() -> Self {
        let m = Self::default();
        m.fail_videos.store(true, Ordering::SeqCst);
        m
    }

    pub(crate) fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub(crate) fn video_ids(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Video { file_id, .. } => Some(file_id),
                Sent::Text { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), TransportError> {
        self.sent.lock().unwrap().push(Sent::Text {
            chat_id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_video(
        &self,
        chat_id: ChatId,
        file_id: &str,
        caption: &str,
    ) -> Result<(), TransportError> {
        if self.fail_videos.load(Ordering::SeqCst) {
            return Err(TransportError::Api {
                code: 400,
                description: "Bad Request: wrong file identifier".to_string(),
                retry_after: None,
            });
        }
        self.sent.lock().unwrap().push(Sent::Video {
            chat_id,
            file_id: file_id.to_string(),
            caption: caption.to_string(),
        });
        Ok(())
    }
}

/// Collects formatted log lines so tests can assert on them.
#[derive(Clone, Default)]
pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub(crate) fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync {
        let writer = self.clone();
        tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish()
    }

    pub(crate) fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
