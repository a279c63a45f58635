use chrono::{DateTime, Utc};

use crate::github::{ActivityEvent, EventKind};
use crate::time_ago::format_time_ago;

use super::{EXTERNAL, WEB_URL, html_escape, placeholder};

pub const NO_ACTIVITY: &str = "No recent activity found.";

/// Icon, action phrase and optional detail line for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSummary {
    pub icon: &'static str,
    pub action: String,
    pub detail: Option<String>,
}

/// Dispatches on the event kind to build the text shown on an event card.
pub fn summarize(kind: &EventKind) -> EventSummary {
    match kind {
        EventKind::Push { commits } => EventSummary {
            icon: "🚀",
            action: format!("Pushed {} commits to", commits.len()),
            detail: commits
                .first()
                .and_then(|c| c.message.lines().next())
                .map(str::to_string),
        },
        EventKind::Create { ref_type, .. } if ref_type == "repository" => EventSummary {
            icon: "📁",
            action: "Created repository".to_string(),
            detail: None,
        },
        EventKind::Create { ref_type, ref_name } => EventSummary {
            icon: "🌿",
            action: format!(
                "Created {} {}",
                ref_type,
                ref_name.as_deref().unwrap_or_default()
            )
            .trim_end()
            .to_string(),
            detail: None,
        },
        EventKind::Issues { action, title } => EventSummary {
            icon: if action == "opened" { "🐛" } else { "✅" },
            action: format!("{} issue", capitalize(action)),
            detail: title.clone(),
        },
        EventKind::PullRequest { action, title } => EventSummary {
            icon: if action == "opened" { "🔄" } else { "✅" },
            action: format!("{} pull request", capitalize(action)),
            detail: title.clone(),
        },
        EventKind::Fork => EventSummary {
            icon: "🍴",
            action: "Forked repository".to_string(),
            detail: None,
        },
        EventKind::Watch => EventSummary {
            icon: "⭐",
            action: "Starred repository".to_string(),
            detail: None,
        },
        EventKind::Other { type_name } => EventSummary {
            icon: "📝",
            action: type_name.replacen("Event", "", 1).to_lowercase(),
            detail: None,
        },
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Card for one activity event; `now` anchors the relative time.
pub fn event_card(event: &ActivityEvent, now: DateTime<Utc>) -> String {
    let summary = summarize(&event.kind);
    let details = summary
        .detail
        .filter(|d| !d.is_empty())
        .map(|d| format!(r#"<div class="event-details">{}</div>"#, html_escape(&d)))
        .unwrap_or_default();

    format!(
        r#"<div class="event-card">
    <div class="event-icon">{icon}</div>
    <div class="event-content">
        <div class="event-header">
            <span class="event-actor">{actor}</span>
            <span class="event-action">{action}</span>
            <a href="{WEB_URL}/{full_name}" {EXTERNAL} class="event-repo">{short_name}</a>
        </div>
        {details}
        <div class="event-time">{time_ago}</div>
    </div>
</div>"#,
        icon = summary.icon,
        actor = html_escape(&event.actor.login),
        action = html_escape(&summary.action),
        full_name = html_escape(&event.repo.name),
        short_name = html_escape(event.repo.short_name()),
        time_ago = format_time_ago(event.created_at, now),
    )
}

/// All event cards in order, or the empty-list placeholder.
pub fn event_list(events: &[ActivityEvent], now: DateTime<Utc>) -> String {
    if events.is_empty() {
        return placeholder(NO_ACTIVITY);
    }
    events.iter().map(|e| event_card(e, now)).collect()
}
