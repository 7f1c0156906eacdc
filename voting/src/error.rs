use thiserror::Error;

#[derive(Debug, Error)]
pub enum VotingError {
    #[error("vote encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("broadcast channel closed")]
    BroadcastClosed,

    #[error("config file unreadable: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
