use crate::feed::error::FeedError;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("max_events must be a positive integer")]
    InvalidMaxEvents { value: String },

    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Invalid configuration: {msg}")]
    ConfigurationError { msg: String },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error(transparent)]
    Feed(#[from] FeedError),
}
