//! Remote activity feeds.

use async_trait::async_trait;

use crate::event::ActivityEvent;
use crate::feed::error::FeedError;

pub mod error;
pub mod github_platform;

/// Static information about a feed platform.
#[derive(Clone, Debug)]
pub struct PlatformInfo {
    /// The name of the platform, e.g. "GitHub".
    pub name: String,
    /// https://api.platform.tld
    pub api_url: String,
}

/// Source of a user's recent public activity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivitySource: Send + Sync {
    /// Fetches the newest page of events for `username`, in feed order.
    async fn fetch_activity(&self, username: &str) -> Result<Vec<ActivityEvent>, FeedError>;
}
