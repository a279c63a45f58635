use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::http::HttpClient;

use super::types::{ActivityEvent, Commit, Contributor, Issue, PullRequest, Repository};

/// Default base URL of the upstream REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Number of events requested for the activity view.
pub const EVENTS_PER_PAGE: &str = "30";

/// Number of commits, issues and pull requests requested for the details modal.
pub const DETAILS_PER_PAGE: &str = "5";

/// Read access to one organization's repositories and activity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrgApi: Send + Sync {
    /// The organization all requests are scoped to.
    fn org(&self) -> &str;

    async fn list_repos(&self) -> Result<Vec<Repository>>;
    async fn list_events(&self) -> Result<Vec<ActivityEvent>>;
    async fn list_contributors(&self, repo: &str) -> Result<Vec<Contributor>>;
    async fn list_commits(&self, repo: &str) -> Result<Vec<Commit>>;
    async fn list_open_issues(&self, repo: &str) -> Result<Vec<Issue>>;
    async fn list_open_pulls(&self, repo: &str) -> Result<Vec<PullRequest>>;
}

/// Unauthenticated client for the upstream REST API.
pub struct GitHub {
    http_client: HttpClient,
    api_url: String,
    org: String,
}

impl GitHub {
    #[tracing::instrument(skip(client, api_url))]
    pub fn new(client: Client, api_url: Option<String>, org: &str) -> Self {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            http_client: HttpClient::new(client),
            api_url: api_url.trim_end_matches('/').to_string(),
            org: org.to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn org_url(&self, tail: &str) -> String {
        format!("{}/orgs/{}/{}", self.api_url, self.org, tail)
    }

    fn repo_url(&self, repo: &str, tail: &str) -> String {
        format!("{}/repos/{}/{}/{}", self.api_url, self.org, repo, tail)
    }
}

#[async_trait]
impl OrgApi for GitHub {
    fn org(&self) -> &str {
        &self.org
    }

    #[tracing::instrument(skip(self))]
    async fn list_repos(&self) -> Result<Vec<Repository>> {
        let url = self.org_url("repos");
        debug!("Fetching repositories from {}...", url);
        self.http_client
            .get_json(&url)
            .await
            .with_context(|| format!("Failed to fetch repositories of {}", self.org))
    }

    #[tracing::instrument(skip(self))]
    async fn list_events(&self) -> Result<Vec<ActivityEvent>> {
        let url = self.org_url("events");
        debug!("Fetching events from {}...", url);
        self.http_client
            .get_json_with_query(&url, &[("per_page", EVENTS_PER_PAGE)])
            .await
            .with_context(|| format!("Failed to fetch events of {}", self.org))
    }

    #[tracing::instrument(skip(self))]
    async fn list_contributors(&self, repo: &str) -> Result<Vec<Contributor>> {
        let url = self.repo_url(repo, "contributors");
        debug!("Fetching contributors from {}...", url);
        self.http_client
            .get_json(&url)
            .await
            .with_context(|| format!("Failed to fetch contributors of {}", repo))
    }

    #[tracing::instrument(skip(self))]
    async fn list_commits(&self, repo: &str) -> Result<Vec<Commit>> {
        let url = self.repo_url(repo, "commits");
        debug!("Fetching commits from {}...", url);
        self.http_client
            .get_json_with_query(&url, &[("per_page", DETAILS_PER_PAGE)])
            .await
            .with_context(|| format!("Failed to fetch commits of {}", repo))
    }

    #[tracing::instrument(skip(self))]
    async fn list_open_issues(&self, repo: &str) -> Result<Vec<Issue>> {
        let url = self.repo_url(repo, "issues");
        debug!("Fetching open issues from {}...", url);
        self.http_client
            .get_json_with_query(&url, &[("state", "open"), ("per_page", DETAILS_PER_PAGE)])
            .await
            .with_context(|| format!("Failed to fetch open issues of {}", repo))
    }

    #[tracing::instrument(skip(self))]
    async fn list_open_pulls(&self, repo: &str) -> Result<Vec<PullRequest>> {
        let url = self.repo_url(repo, "pulls");
        debug!("Fetching open pull requests from {}...", url);
        self.http_client
            .get_json_with_query(&url, &[("state", "open"), ("per_page", DETAILS_PER_PAGE)])
            .await
            .with_context(|| format!("Failed to fetch open pull requests of {}", repo))
    }
}
