//! Last-fetched repositories and events for the current session.

use crate::github::{ActivityEvent, Repository};

/// Holds one repository snapshot and one event snapshot. Each fetch replaces
/// its snapshot wholesale; the two are never merged.
#[derive(Debug, Default)]
pub struct RepoStore {
    repos: Vec<Repository>,
    events: Vec<ActivityEvent>,
}

impl RepoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repos(&self) -> &[Repository] {
        &self.repos
    }

    pub fn events(&self) -> &[ActivityEvent] {
        &self.events
    }

    pub fn replace_repos(&mut self, repos: Vec<Repository>) {
        self.repos = repos;
    }

    pub fn replace_events(&mut self, events: Vec<ActivityEvent>) {
        self.events = events;
    }

    /// Repositories whose name or description contains `query`, ignoring case.
    ///
    /// An empty query matches everything. Order follows the stored snapshot.
    pub fn filter(&self, query: &str) -> Vec<&Repository> {
        let query = query.to_lowercase();
        self.repos
            .iter()
            .filter(|repo| matches_query(repo, &query))
            .collect()
    }
}

fn matches_query(repo: &Repository, lowered_query: &str) -> bool {
    repo.name.to_lowercase().contains(lowered_query)
        || repo
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(lowered_query))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, description: Option<&str>) -> Repository {
        Repository {
            name: name.into(),
            description: description.map(Into::into),
            stargazers_count: 0,
            forks_count: 0,
            open_issues_count: 0,
            language: None,
            html_url: format!("https://github.com/org/{}", name),
            pushed_at: None,
        }
    }

    fn store() -> RepoStore {
        let mut store = RepoStore::new();
        store.replace_repos(vec![
            repo("iso-profiles", Some("Archiso profiles")),
            repo("Calamares-Config", None),
            repo("website", Some("Project homepage and ISO downloads")),
            repo("dotfiles", None),
        ]);
        store
    }

    fn names(repos: &[&Repository]) -> Vec<String> {
        repos.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_empty_query_matches_all() {
        let store = store();
        assert_eq!(store.filter("").len(), 4);
    }

    #[test]
    fn test_matches_name_or_description_ignoring_case() {
        let store = store();
        assert_eq!(names(&store.filter("ISO")), vec!["iso-profiles", "website"]);
        assert_eq!(names(&store.filter("calamares")), vec!["Calamares-Config"]);
    }

    #[test]
    fn test_missing_description_is_not_a_match() {
        let store = store();
        assert!(store.filter("homepage").iter().all(|r| r.description.is_some()));
        assert!(store.filter("nothing-matches-this").is_empty());
    }

    #[test]
    fn test_filter_result_is_subset_and_store_unchanged() {
        let store = store();
        for query in ["", "i", "s", "DOT", "zzz", "profiles"] {
            let result = store.filter(query);
            let q = query.to_lowercase();
            for r in &result {
                assert!(store.repos().contains(r));
                let in_name = r.name.to_lowercase().contains(&q);
                let in_desc = r
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&q));
                assert!(in_name || in_desc);
            }
        }
        assert_eq!(store.repos().len(), 4);
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut store = store();
        store.replace_repos(vec![repo("only", None)]);
        assert_eq!(store.repos().len(), 1);
        assert!(store.events().is_empty());
    }
}
