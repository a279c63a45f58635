use crate::github::Repository;

use super::{EXTERNAL, html_escape, placeholder};

pub const NO_DESCRIPTION: &str = "No description provided.";
pub const NO_LANGUAGE: &str = "N/A";
pub const NO_REPOSITORIES: &str = "No repositories found.";

/// Card for one repository. The name rides along in `data-repo` so a click
/// can open the details modal.
pub fn repo_card(repo: &Repository) -> String {
    let name = html_escape(&repo.name);
    let description = html_escape(repo.description.as_deref().unwrap_or(NO_DESCRIPTION));
    let language = html_escape(repo.language.as_deref().unwrap_or(NO_LANGUAGE));

    format!(
        r#"<div class="repo-card" data-repo="{name}">
    <div class="repo-title">{name}</div>
    <div class="repo-desc">{description}</div>
    <div class="repo-meta">
        <span title="Stars">⭐ {stars}</span>
        <span title="Forks">🍴 {forks}</span>
        <span title="Open Issues">🐞 {issues}</span>
        <span title="Language">💻 {language}</span>
    </div>
    <a class="repo-link" href="{url}" {EXTERNAL}>View on GitHub</a>
</div>"#,
        stars = repo.stargazers_count,
        forks = repo.forks_count,
        issues = repo.open_issues_count,
        url = html_escape(&repo.html_url),
    )
}

/// All cards in order, or the empty-list placeholder.
pub fn repo_list(repos: &[&Repository]) -> String {
    if repos.is_empty() {
        return placeholder(NO_REPOSITORIES);
    }
    repos.iter().map(|r| repo_card(r)).collect()
}
