//! Markup for the dashboard: cards, modal sections and the page surface.

mod event_card;
mod modal;
mod page;
mod repo_card;

pub use event_card::{EventSummary, event_card, event_list, summarize};
pub use modal::{modal_error, modal_loading, modal_sections};
pub use page::{Page, Surface};
pub use repo_card::{repo_card, repo_list};

#[cfg(test)]
pub use page::MockSurface;

/// Web host that event cards link to.
pub const WEB_URL: &str = "https://github.com";

/// Attributes for links leaving the dashboard.
const EXTERNAL: &str = r#"target="_blank" rel="noopener noreferrer""#;

/// Escapes text for interpolation into element content or attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Placeholder block shown in place of an empty list.
fn placeholder(text: &str) -> String {
    format!(r#"<div class="loading-status">{}</div>"#, html_escape(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(html_escape("plain"), "plain");
    }
}
