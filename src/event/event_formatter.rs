//! One-line summaries for activity events.

use crate::event::ActivityEvent;
use crate::event::EventKind;
use crate::event::timestamp::format_timestamp;

/// Builds the display line for an event.
///
/// Returns `None` for unsupported event types. A supported event missing a
/// field its summary needs is rendered as `<type> in <repo>` instead.
pub fn format_event(event: &ActivityEvent) -> Option<String> {
    if !event.kind.is_supported() {
        return None;
    }

    let Some(message) = summarize(event) else {
        return Some(fallback_line(event));
    };

    match &event.created_at {
        Some(created_at) => Some(format!("{} - {}", format_timestamp(created_at), message)),
        None => Some(message),
    }
}

fn summarize(event: &ActivityEvent) -> Option<String> {
    let repo = event.repo_name.as_deref()?;

    let message = match &event.kind {
        EventKind::Push { commits } => format!("Pushed {} commits to {}", (*commits)?, repo),
        EventKind::Issues { action } => format!("{} an issue in {}", action.as_deref()?, repo),
        EventKind::IssueComment => format!("Commented on an issue in {}", repo),
        EventKind::Watch => format!("Starred {}", repo),
        EventKind::Fork => format!("Forked {}", repo),
        EventKind::Create { ref_type } => format!("Created {} in {}", ref_type.as_deref()?, repo),
        EventKind::Delete { ref_type } => format!("Deleted {} in {}", ref_type.as_deref()?, repo),
        EventKind::PullRequest { action } => {
            format!("{} a pull request in {}", action.as_deref()?, repo)
        }
        EventKind::Release { tag_name } => {
            format!("Released {} in {}", tag_name.as_deref()?, repo)
        }
        EventKind::Public => format!("Made {} public", repo),
        EventKind::Member { action } => {
            format!("{} a collaborator to {}", action.as_deref()?, repo)
        }
        EventKind::Unknown { .. } => return None,
    };

    Some(message)
}

fn fallback_line(event: &ActivityEvent) -> String {
    format!(
        "{} in {}",
        event.kind.type_name(),
        event.repo_name.as_deref().unwrap_or("unknown")
    )
}
