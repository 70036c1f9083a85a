use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Enter some emojis")]
    NoCards,
    #[error("Unknown action type \"{0}\"")]
    UnknownAction(String),
    #[error("Invalid intent: {0}")]
    InvalidIntent(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("Invalid link: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Link has no seed parameter (s)")]
    MissingSeed,
    #[error("Link has no cards parameter (c)")]
    MissingCards,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Corrupt state record: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("Unsupported state record version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Share target unavailable: {0}")]
    Unavailable(String),
    #[error("Share target failed: {0}")]
    Failed(#[from] std::io::Error),
}
