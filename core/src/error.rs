use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("bot token not set (env var {var})")]
    MissingToken { var: &'static str },

    #[error("failed to read config file: {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {path}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("env var invalid: {key}")]
    EnvInvalid {
        key: String,
        #[source]
        source: anyhow::Error,
    },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog file is not a JSON array of strings: {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("transport error")]
    Http(#[source] anyhow::Error),

    #[error("bot api error {code}: {description}")]
    Api {
        code: i64,
        description: String,
        retry_after: Option<u64>,
    },

    #[error("decode/serde error")]
    Decode(#[source] anyhow::Error),
}

impl TransportError {
    /// Seconds the API asked us to wait before the next request, if any.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            TransportError::Api { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum BotError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}
