//! The page surface the dashboard paints into.

use crate::dashboard::View;

use super::html_escape;

/// The DOM-facing slots of the dashboard: status line, card list, view
/// toggles, search box and the details modal.
#[cfg_attr(test, mockall::automock)]
pub trait Surface {
    fn set_status(&mut self, text: &str);
    fn set_list(&mut self, html: String);
    fn set_active_view(&mut self, view: View);
    fn set_search(&mut self, query: &str);
    fn open_modal(&mut self, repo: &str, body: String);
    fn set_modal_body(&mut self, body: String);
    fn close_modal(&mut self);
    fn is_modal_open(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Modal {
    repo: String,
    body: String,
}

/// Headless page: holds what a browser would display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    status: String,
    list: String,
    active_view: View,
    search: String,
    modal: Option<Modal>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn list(&self) -> &str {
        &self.list
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Repository whose details are open, if any.
    pub fn modal_repo(&self) -> Option<&str> {
        self.modal.as_ref().map(|m| m.repo.as_str())
    }

    pub fn modal_body(&self) -> Option<&str> {
        self.modal.as_ref().map(|m| m.body.as_str())
    }

    /// Renders the page as a standalone HTML document.
    pub fn to_document(&self, org: &str) -> String {
        let org = html_escape(org);
        let button = |view: View, id: &str, label: &str| {
            let class = if view == self.active_view {
                "view-toggle active"
            } else {
                "view-toggle"
            };
            format!(r#"<button id="{id}" class="{class}">{label}</button>"#)
        };

        let modal = match &self.modal {
            Some(m) => format!(
                r#"<div id="modal" class="modal visible" data-repo="{}">
<div class="modal-content"><button class="modal-close" title="Close">×</button>
<h2>{}</h2>
{}
</div>
</div>"#,
                html_escape(&m.repo),
                html_escape(&m.repo),
                m.body
            ),
            None => r#"<div id="modal" class="modal"></div>"#.to_string(),
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{org} repositories</title>
<style>
body {{ font-family: sans-serif; background: #232526; color: #eee; }}
.view-toggle {{ background-color: #444; color: white; border: none; padding: 0.5em 1em; }}
.view-toggle.active {{ background-color: #2ecc71; color: #232526; }}
.repo-card, .event-card {{ background: #333; border-radius: 8px; margin: 0.5em 0; padding: 1em; }}
.modal {{ display: none; }}
.modal.visible {{ display: flex; }}
</style>
</head>
<body>
<header><h1>{org}</h1></header>
<nav>
{all}
{active}
<input id="repo-search" type="search" placeholder="Search repositories" value="{search}">
</nav>
<div id="loading-status" class="loading-status">{status}</div>
<div id="repo-list">
{list}
</div>
{modal}
</body>
</html>
"#,
            all = button(View::AllRepos, "show-all", "All Repositories"),
            active = button(View::RecentActivity, "show-active", "Recent Activity"),
            search = html_escape(&self.search),
            status = html_escape(&self.status),
            list = self.list,
        )
    }
}

impl Surface for Page {
    fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
    }

    fn set_list(&mut self, html: String) {
        self.list = html;
    }

    fn set_active_view(&mut self, view: View) {
        self.active_view = view;
    }

    fn set_search(&mut self, query: &str) {
        self.search = query.to_string();
    }

    fn open_modal(&mut self, repo: &str, body: String) {
        self.modal = Some(Modal {
            repo: repo.to_string(),
            body,
        });
    }

    fn set_modal_body(&mut self, body: String) {
        if let Some(modal) = self.modal.as_mut() {
            modal.body = body;
        }
    }

    fn close_modal(&mut self) {
        self.modal = None;
    }

    fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_toggle_highlighted() {
        let mut page = Page::new();
        let doc = page.to_document("acme");
        assert_eq!(doc.matches("view-toggle active").count(), 1);
        assert!(doc.contains(r#"<button id="show-all" class="view-toggle active">"#));

        page.set_active_view(View::RecentActivity);
        let doc = page.to_document("acme");
        assert_eq!(doc.matches("view-toggle active").count(), 1);
        assert!(doc.contains(r#"<button id="show-active" class="view-toggle active">"#));
    }

    #[test]
    fn test_modal_lifecycle() {
        let mut page = Page::new();
        assert!(!page.is_modal_open());

        // Body updates are ignored while closed.
        page.set_modal_body("ignored".into());
        assert_eq!(page.modal_body(), None);

        page.open_modal("iso", "loading".into());
        assert_eq!(page.modal_repo(), Some("iso"));
        page.set_modal_body("sections".into());
        assert_eq!(page.modal_body(), Some("sections"));
        assert!(page.to_document("acme").contains("modal visible"));

        page.close_modal();
        assert!(!page.is_modal_open());
        assert!(!page.to_document("acme").contains("modal visible"));
    }

    #[test]
    fn test_document_contains_slots() {
        let mut page = Page::new();
        page.set_status("Showing 1 repositories.");
        page.set_list("<div class=\"repo-card\"></div>".into());
        page.set_search("i\"so");
        let doc = page.to_document("acme");
        assert!(doc.contains("<title>acme repositories</title>"));
        assert!(doc.contains("Showing 1 repositories."));
        assert!(doc.contains("<div class=\"repo-card\"></div>"));
        assert!(doc.contains(r#"value="i&quot;so""#));
    }
}
