use crate::github::DetailBundle;

use super::{EXTERNAL, html_escape};

pub const LOADING_DETAILS: &str = "Loading details...";

/// Body of the modal while the detail bundle is in flight.
pub fn modal_loading() -> String {
    format!(r#"<div class="loading-status">{LOADING_DETAILS}</div>"#)
}

/// Body of the modal when any of the detail fetches failed.
pub fn modal_error(reason: &str) -> String {
    format!(
        r#"<div class="loading-status">Error loading details: {}</div>"#,
        html_escape(reason)
    )
}

/// The four detail sections. Entries of the issues list that are really
/// pull requests are left out.
pub fn modal_sections(bundle: &DetailBundle) -> String {
    let contributors = bundle
        .contributors
        .iter()
        .map(|c| {
            format!(
                r#"<li><a href="{}" {EXTERNAL}>{}</a> ({} commits)</li>"#,
                html_escape(&c.html_url),
                html_escape(&c.login),
                c.contributions
            )
        })
        .collect::<Vec<_>>();

    let commits = bundle
        .commits
        .iter()
        .map(|c| {
            let subject = c.message.lines().next().unwrap_or_default();
            format!(
                r#"<li><a href="{}" {EXTERNAL}>{}</a> by {}</li>"#,
                html_escape(&c.html_url),
                html_escape(subject),
                html_escape(c.author_name.as_deref().unwrap_or("unknown"))
            )
        })
        .collect::<Vec<_>>();

    let issues = bundle
        .issues
        .iter()
        .filter(|i| !i.is_pull_request)
        .map(|i| link_item(&i.html_url, &i.title))
        .collect::<Vec<_>>();

    let pulls = bundle
        .pulls
        .iter()
        .map(|p| link_item(&p.html_url, &p.title))
        .collect::<Vec<_>>();

    [
        section("Top Contributors", &contributors, "No contributors found."),
        section("Latest Commits", &commits, "No commits found."),
        section("Open Issues", &issues, "No open issues."),
        section("Open Pull Requests", &pulls, "No open PRs."),
    ]
    .join("\n")
}

fn link_item(url: &str, text: &str) -> String {
    format!(
        r#"<li><a href="{}" {EXTERNAL}>{}</a></li>"#,
        html_escape(url),
        html_escape(text)
    )
}

fn section(title: &str, items: &[String], empty: &str) -> String {
    let body = if items.is_empty() {
        format!("<li>{}</li>", empty)
    } else {
        items.concat()
    };
    format!(
        r#"<div class="modal-section">
    <h3>{}</h3>
    <ul>{}</ul>
</div>"#,
        title, body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{Commit, Contributor, Issue, PullRequest};

    fn bundle() -> DetailBundle {
        DetailBundle {
            contributors: vec![Contributor {
                login: "alice".into(),
                html_url: "https://github.com/alice".into(),
                avatar_url: None,
                contributions: 42,
            }],
            commits: vec![Commit {
                message: "Fix installer\n\nBody".into(),
                author_name: Some("Alice".into()),
                html_url: "https://github.com/o/r/commit/1".into(),
            }],
            issues: vec![
                Issue {
                    title: "Real bug".into(),
                    html_url: "https://github.com/o/r/issues/1".into(),
                    is_pull_request: false,
                },
                Issue {
                    title: "Disguised PR".into(),
                    html_url: "https://github.com/o/r/pull/2".into(),
                    is_pull_request: true,
                },
            ],
            pulls: vec![PullRequest {
                title: "Disguised PR".into(),
                html_url: "https://github.com/o/r/pull/2".into(),
            }],
        }
    }

    #[test]
    fn test_sections_render_all_collections() {
        let html = modal_sections(&bundle());
        assert!(html.contains("Top Contributors"));
        assert!(html.contains("alice</a> (42 commits)"));
        assert!(html.contains("Fix installer</a> by Alice"));
        assert!(!html.contains("Body"));
        assert!(html.contains("Real bug"));
        assert!(html.contains("Open Pull Requests"));
    }

    #[test]
    fn test_pull_request_excluded_from_issues_section() {
        let html = modal_sections(&bundle());
        let issues_start = html.find("Open Issues").unwrap();
        let pulls_start = html.find("Open Pull Requests").unwrap();
        let issues_section = &html[issues_start..pulls_start];
        assert!(issues_section.contains("Real bug"));
        assert!(!issues_section.contains("Disguised PR"));
        // Still listed where it belongs.
        assert!(html[pulls_start..].contains("Disguised PR"));
    }

    #[test]
    fn test_empty_sections_use_placeholders() {
        let html = modal_sections(&DetailBundle::default());
        assert!(html.contains("No contributors found."));
        assert!(html.contains("No commits found."));
        assert!(html.contains("No open issues."));
        assert!(html.contains("No open PRs."));
    }

    #[test]
    fn test_issues_only_pull_requests_shows_placeholder() {
        let mut b = DetailBundle::default();
        b.issues.push(Issue {
            title: "PR".into(),
            html_url: "u".into(),
            is_pull_request: true,
        });
        assert!(modal_sections(&b).contains("No open issues."));
    }

    #[test]
    fn test_loading_and_error() {
        assert!(modal_loading().contains(LOADING_DETAILS));
        let err = modal_error("HTTP error! status: 500");
        assert!(err.contains("Error loading details: HTTP error! status: 500"));
    }
}
