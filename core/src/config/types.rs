use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub polling: PollingConfig,

    #[serde(default)]
    pub telegram: TelegramConfig,

    #[serde(default)]
    pub messages: MessagesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON array of video file ids, resolved relative to the working directory.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    "video_ids.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Pause between two `getUpdates` calls.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Long-poll timeout handed to the Bot API.
    #[serde(default = "default_long_poll_timeout_secs")]
    pub long_poll_timeout_secs: u64,
}

fn default_interval_ms() -> u64 {
    3_000
}

fn default_long_poll_timeout_secs() -> u64 {
    10
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            long_poll_timeout_secs: default_long_poll_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Budget for a single request on top of any long-poll wait.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_api_base_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagesConfig {
    #[serde(default = "default_welcome")]
    pub welcome: String,

    #[serde(default = "default_no_videos")]
    pub no_videos: String,

    #[serde(default = "default_video_caption")]
    pub video_caption: String,
}

fn default_welcome() -> String {
    "Welcome! I am your random video bot. Click /video to get a random video!".to_string()
}

fn default_no_videos() -> String {
    "Sorry, no video IDs found. Please upload videos first.".to_string()
}

fn default_video_caption() -> String {
    "Enjoy this random video from the cloud!".to_string()
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            welcome: default_welcome(),
            no_videos: default_no_videos(),
            video_caption: default_video_caption(),
        }
    }
}
