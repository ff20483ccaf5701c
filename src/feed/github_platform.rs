//! GitHub public events platform integration.

use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use wreq::Client;
use wreq::header::ACCEPT;
use wreq::header::HeaderMap;
use wreq::header::HeaderValue;
use wreq::header::USER_AGENT;

use crate::event::ActivityEvent;
use crate::feed::ActivitySource;
use crate::feed::PlatformInfo;
use crate::feed::error::FeedError;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
const CLIENT_USER_AGENT: &str = "GitHub-Activity-CLI/1.0";
const GITHUB_V3_JSON: &str = "application/vnd.github.v3+json";

/// GitHub REST API platform for user activity.
pub struct GitHubPlatform {
    pub info: PlatformInfo,
    client: Client,
}

impl GitHubPlatform {
    /// Creates a platform pointed at the public GitHub API.
    pub fn new() -> Result<Self, FeedError> {
        Self::with_api_url(DEFAULT_API_URL)
    }

    pub fn with_api_url(api_url: &str) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_V3_JSON));
        let client = Client::builder().default_headers(headers).build()?;

        let info = PlatformInfo {
            name: "GitHub".to_string(),
            api_url: api_url.trim_end_matches('/').to_string(),
        };

        Ok(Self { info, client })
    }

    fn get_events_url(&self, username: &str) -> String {
        format!("{}/users/{}/events", self.info.api_url, username)
    }

    async fn send(&self, request: wreq::RequestBuilder) -> Result<wreq::Response, wreq::Error> {
        let req = request.build()?;
        debug!("Making request to: {}", req.url());
        self.client.execute(req).await
    }

    /// Maps a non-success status to its error. `reason` is the canonical phrase.
    fn check_status(
        &self,
        status: u16,
        reason: Option<&str>,
        username: &str,
    ) -> Result<(), FeedError> {
        match status {
            200..=299 => Ok(()),
            404 => Err(FeedError::UserNotFound {
                username: username.to_string(),
            }),
            403 => Err(FeedError::RateLimited),
            _ => Err(FeedError::ApiError {
                status,
                reason: reason.unwrap_or("Unknown").to_string(),
            }),
        }
    }

    fn get_events_from_body(&self, body: &str) -> Result<Vec<ActivityEvent>, FeedError> {
        let resp: Value = serde_json::from_str(body)?;
        let events = resp
            .as_array()
            .ok_or_else(|| FeedError::InvalidResponse {
                message: format!("expected an array of events, got {}", json_kind(&resp)),
            })?;
        Ok(events.iter().map(ActivityEvent::from_value).collect())
    }

    async fn request_events(&self, username: &str) -> Result<Vec<ActivityEvent>, FeedError> {
        let request = self.client.get(self.get_events_url(username));
        let response = self.send(request).await?;

        let status = response.status();
        debug!("{} responded with status {}", self.info.name, status);
        self.check_status(status.as_u16(), status.canonical_reason(), username)?;

        let body = response.text().await?;
        let events = self.get_events_from_body(&body)?;
        debug!("Decoded {} events for '{}'", events.len(), username);
        Ok(events)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[async_trait]
impl ActivitySource for GitHubPlatform {
    async fn fetch_activity(&self, username: &str) -> Result<Vec<ActivityEvent>, FeedError> {
        let result = self.request_events(username).await;
        if let Err(e) = &result {
            debug!("Failed to fetch activity for '{}': {}", username, e);
        }
        result
    }
}
