//! Activity events decoded from the GitHub events feed.
//!
//! Events are read schema-on-read: every field beyond `type` may be missing or
//! have the wrong shape, so the referenced fields of each known event type are
//! kept as `Option`s and unknown types keep their raw payload.

use serde_json::Value;

pub mod event_formatter;
pub mod timestamp;

static NULL: Value = Value::Null;

/// One recorded user action from the activity feed.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityEvent {
    pub kind: EventKind,
    /// `repo.name`, e.g. "rust-lang/rust".
    pub repo_name: Option<String>,
    /// Raw `created_at` timestamp, e.g. "2024-01-15T10:30:00Z".
    pub created_at: Option<String>,
}

/// Event type tag together with the payload fields its summary line needs.
#[derive(Clone, Debug, PartialEq)]
pub enum EventKind {
    Push { commits: Option<u64> },
    Issues { action: Option<String> },
    IssueComment,
    Watch,
    Fork,
    Create { ref_type: Option<String> },
    Delete { ref_type: Option<String> },
    PullRequest { action: Option<String> },
    Release { tag_name: Option<String> },
    Public,
    Member { action: Option<String> },
    Unknown { kind: String, payload: Value },
}

impl EventKind {
    /// Returns the feed's type tag, e.g. "PushEvent".
    pub fn type_name(&self) -> &str {
        match self {
            EventKind::Push { .. } => "PushEvent",
            EventKind::Issues { .. } => "IssuesEvent",
            EventKind::IssueComment => "IssueCommentEvent",
            EventKind::Watch => "WatchEvent",
            EventKind::Fork => "ForkEvent",
            EventKind::Create { .. } => "CreateEvent",
            EventKind::Delete { .. } => "DeleteEvent",
            EventKind::PullRequest { .. } => "PullRequestEvent",
            EventKind::Release { .. } => "ReleaseEvent",
            EventKind::Public => "PublicEvent",
            EventKind::Member { .. } => "MemberEvent",
            EventKind::Unknown { kind, .. } => kind,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, EventKind::Unknown { .. })
    }

    fn from_parts(kind: &str, payload: &Value) -> Self {
        let action = || get_str(payload, "action");
        let ref_type = || get_str(payload, "ref_type");

        match kind {
            "PushEvent" => EventKind::Push {
                commits: get_commit_count(payload),
            },
            "IssuesEvent" => EventKind::Issues { action: action() },
            "IssueCommentEvent" => EventKind::IssueComment,
            "WatchEvent" => EventKind::Watch,
            "ForkEvent" => EventKind::Fork,
            "CreateEvent" => EventKind::Create {
                ref_type: ref_type(),
            },
            "DeleteEvent" => EventKind::Delete {
                ref_type: ref_type(),
            },
            "PullRequestEvent" => EventKind::PullRequest { action: action() },
            "ReleaseEvent" => EventKind::Release {
                tag_name: payload
                    .get("release")
                    .and_then(|r| get_str(r, "tag_name")),
            },
            "PublicEvent" => EventKind::Public,
            "MemberEvent" => EventKind::Member { action: action() },
            _ => EventKind::Unknown {
                kind: kind.to_string(),
                payload: payload.clone(),
            },
        }
    }
}

impl ActivityEvent {
    /// Reads an event from one element of the feed array. Never fails: a
    /// record without a string `type` becomes an unknown event.
    pub fn from_value(value: &Value) -> Self {
        let payload = value.get("payload").unwrap_or(&NULL);
        let kind = match value.get("type").and_then(|v| v.as_str()) {
            Some(kind) => EventKind::from_parts(kind, payload),
            None => EventKind::Unknown {
                kind: String::new(),
                payload: payload.clone(),
            },
        };

        Self {
            kind,
            repo_name: value.get("repo").and_then(|r| get_str(r, "name")),
            created_at: get_str(value, "created_at").filter(|s| !s.is_empty()),
        }
    }
}

fn get_str(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(|v| v.as_str()).map(|s| s.to_string())
}

/// `payload.commits` is a list of commit objects in the live API, but older
/// recordings carry a plain count. Both are read as a count.
fn get_commit_count(payload: &Value) -> Option<u64> {
    match payload.get("commits")? {
        Value::Array(commits) => Some(commits.len() as u64),
        other => other.as_u64(),
    }
}
