#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FeedError {
    #[error("User '{username}' not found")]
    UserNotFound { username: String },

    #[error("API rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("GitHub API error: {status} - {reason}")]
    ApiError { status: u16, reason: String },

    #[error("Network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Invalid response from GitHub API: {message}")]
    InvalidResponse { message: String },

    #[error("Unexpected error: {message}")]
    Unexpected { message: String },
}

impl From<serde_json::Error> for FeedError {
    fn from(e: serde_json::Error) -> Self {
        FeedError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

impl From<wreq::Error> for FeedError {
    fn from(e: wreq::Error) -> Self {
        if e.is_builder() {
            return FeedError::Unexpected {
                message: e.to_string(),
            };
        }
        FeedError::Network(Box::new(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        let err = FeedError::UserNotFound {
            username: "ghost".to_string(),
        };
        assert_eq!(err.to_string(), "User 'ghost' not found");
        assert_eq!(
            FeedError::RateLimited.to_string(),
            "API rate limit exceeded. Please try again later."
        );
        let err = FeedError::ApiError {
            status: 502,
            reason: "Bad Gateway".to_string(),
        };
        assert_eq!(err.to_string(), "GitHub API error: 502 - Bad Gateway");
    }

    #[test]
    fn test_invalid_response_message() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = FeedError::from(parse_err);
        assert!(
            err.to_string()
                .starts_with("Invalid response from GitHub API: ")
        );
    }
}
