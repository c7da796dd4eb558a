use thiserror::Error;

/// Typed error hierarchy for chatfront.
///
/// Use at module boundaries (message construction, store appends, config loading).
/// Internal/leaf functions can continue using `anyhow::Result` — the `Internal` variant
/// allows seamless conversion via the `?` operator.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("message must carry text content or a media attachment")]
    EmptyMessage,

    #[error("unknown conversation: {0}")]
    UnknownConversation(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
