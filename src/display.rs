//! Console rendering of a user's recent activity.

use std::io::Write;
use std::sync::Arc;

use log::debug;

use crate::error::AppError;
use crate::event::event_formatter::format_event;
use crate::feed::ActivitySource;

/// What a display run ended up showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayOutcome {
    /// The feed was empty.
    NoActivity,
    /// The feed had events but none of a supported type.
    NoSupportedEvents,
    /// Number of event lines printed.
    Displayed(usize),
}

/// Fetches activity from a source and prints one line per supported event.
pub struct ActivityDisplay {
    source: Arc<dyn ActivitySource>,
}

impl ActivityDisplay {
    pub fn new(source: Arc<dyn ActivitySource>) -> Self {
        Self { source }
    }

    /// Prints at most `max_events` formatted events for `username` to `out`.
    ///
    /// Unsupported events are skipped and do not count toward `max_events`.
    /// Fetch failures are returned after the status line has been printed.
    pub async fn display<W: Write>(
        &self,
        username: &str,
        max_events: usize,
        out: &mut W,
    ) -> Result<DisplayOutcome, AppError> {
        writeln!(out, "🔍 Fetching recent activity for '{}'...", username)?;
        out.flush()?;

        let events = self.source.fetch_activity(username).await?;

        if events.is_empty() {
            writeln!(out, "📭 No recent activity found for '{}'", username)?;
            return Ok(DisplayOutcome::NoActivity);
        }

        writeln!(out, "\n📊 Recent activity for {}:\n", username)?;

        let mut displayed = 0;
        for line in events.iter().filter_map(format_event).take(max_events) {
            writeln!(out, "• {}", line)?;
            displayed += 1;
        }
        debug!(
            "Displayed {} of {} events for '{}'",
            displayed,
            events.len(),
            username
        );

        if displayed == 0 {
            writeln!(out, "No supported event types found in recent activity.")?;
            return Ok(DisplayOutcome::NoSupportedEvents);
        }

        writeln!(out, "\n📈 Displaying {} most recent events.", displayed)?;
        Ok(DisplayOutcome::Displayed(displayed))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::event::ActivityEvent;
    use crate::feed::MockActivitySource;
    use crate::feed::error::FeedError;

    fn watch_event(n: usize) -> ActivityEvent {
        ActivityEvent::from_value(&json!({
            "type": "WatchEvent",
            "repo": { "name": format!("octocat/repo-{n}") },
        }))
    }

    fn gollum_event() -> ActivityEvent {
        ActivityEvent::from_value(&json!({
            "type": "GollumEvent",
            "repo": { "name": "octocat/wiki" },
        }))
    }

    fn display_with(events: Vec<ActivityEvent>) -> ActivityDisplay {
        let mut source = MockActivitySource::new();
        source
            .expect_fetch_activity()
            .withf(|username| username == "octocat")
            .times(1)
            .returning(move |_| Ok(events.clone()));
        ActivityDisplay::new(Arc::new(source))
    }

    async fn run(display: &ActivityDisplay, max_events: usize) -> (DisplayOutcome, String) {
        let mut out = Vec::new();
        let outcome = display
            .display("octocat", max_events, &mut out)
            .await
            .unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    fn event_lines(output: &str) -> Vec<&str> {
        output.lines().filter(|l| l.starts_with("• ")).collect()
    }

    #[tokio::test]
    async fn test_stops_at_max_events() {
        let display = display_with((0..15).map(watch_event).collect());
        let (outcome, output) = run(&display, 10).await;

        assert_eq!(outcome, DisplayOutcome::Displayed(10));
        let expected: Vec<String> = (0..10)
            .map(|n| format!("• Starred octocat/repo-{n}"))
            .collect();
        assert_eq!(event_lines(&output), expected);
        assert!(output.ends_with("\n📈 Displaying 10 most recent events.\n"));
    }

    #[tokio::test]
    async fn test_unsupported_events_do_not_count() {
        let mut events = Vec::new();
        for n in 0..10 {
            if n % 2 == 0 {
                events.push(gollum_event());
            }
            events.push(watch_event(n));
        }
        assert_eq!(events.len(), 15);

        let display = display_with(events);
        let (outcome, output) = run(&display, 10).await;

        assert_eq!(outcome, DisplayOutcome::Displayed(10));
        assert_eq!(event_lines(&output).len(), 10);
        assert_eq!(event_lines(&output)[9], "• Starred octocat/repo-9");
        assert!(!output.contains("wiki"));
        assert!(output.contains("📈 Displaying 10 most recent events."));
    }

    #[tokio::test]
    async fn test_fewer_events_than_max() {
        let display = display_with(vec![watch_event(0), gollum_event(), watch_event(1)]);
        let (outcome, output) = run(&display, 10).await;

        assert_eq!(outcome, DisplayOutcome::Displayed(2));
        assert_eq!(
            output,
            "🔍 Fetching recent activity for 'octocat'...\n\
             \n📊 Recent activity for octocat:\n\n\
             • Starred octocat/repo-0\n\
             • Starred octocat/repo-1\n\
             \n📈 Displaying 2 most recent events.\n"
        );
    }

    #[tokio::test]
    async fn test_empty_feed() {
        let display = display_with(Vec::new());
        let (outcome, output) = run(&display, 10).await;

        assert_eq!(outcome, DisplayOutcome::NoActivity);
        assert_eq!(
            output,
            "🔍 Fetching recent activity for 'octocat'...\n\
             📭 No recent activity found for 'octocat'\n"
        );
    }

    #[tokio::test]
    async fn test_all_unsupported_events() {
        let display = display_with(vec![gollum_event(), gollum_event()]);
        let (outcome, output) = run(&display, 10).await;

        assert_eq!(outcome, DisplayOutcome::NoSupportedEvents);
        assert!(event_lines(&output).is_empty());
        assert!(output.ends_with("No supported event types found in recent activity.\n"));
        assert!(!output.contains("📈"));
    }

    #[tokio::test]
    async fn test_fallback_line_counts_as_displayed() {
        let incomplete = ActivityEvent::from_value(&json!({ "type": "PushEvent" }));
        let display = display_with(vec![incomplete, watch_event(0)]);
        let (outcome, output) = run(&display, 1).await;

        assert_eq!(outcome, DisplayOutcome::Displayed(1));
        assert_eq!(event_lines(&output), vec!["• PushEvent in unknown"]);
    }

    #[tokio::test]
    async fn test_fetch_error_is_returned() {
        let mut source = MockActivitySource::new();
        source
            .expect_fetch_activity()
            .times(1)
            .returning(|_| Err(FeedError::RateLimited));
        let display = ActivityDisplay::new(Arc::new(source));

        let mut out = Vec::new();
        let err = display.display("octocat", 10, &mut out).await.unwrap_err();

        assert!(matches!(err, AppError::Feed(FeedError::RateLimited)));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "🔍 Fetching recent activity for 'octocat'...\n"
        );
    }
}
