use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::api;

/// A repository of the organization, as listed by `/orgs/{org}/repos`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
    pub language: Option<String>,
    pub html_url: String,
    pub pushed_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Actor {
    pub login: String,
}

/// Repository reference inside an event, `name` is "org/repo".
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RepoRef {
    pub name: String,
}

impl RepoRef {
    /// The repository part of "org/repo".
    pub fn short_name(&self) -> &str {
        self.name
            .split_once('/')
            .map(|(_, repo)| repo)
            .unwrap_or(&self.name)
    }
}

/// A commit summary carried by a push event.
#[derive(Debug, Clone, PartialEq)]
pub struct PushCommit {
    pub message: String,
}

/// Event type together with the payload fields the dashboard shows.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Push {
        commits: Vec<PushCommit>,
    },
    Create {
        ref_type: String,
        ref_name: Option<String>,
    },
    /// `title` is absent when the payload carries no issue title.
    Issues {
        action: String,
        title: Option<String>,
    },
    PullRequest {
        action: String,
        title: Option<String>,
    },
    Fork,
    Watch,
    /// Any event type without a dedicated variant, e.g. "ReleaseEvent".
    Other {
        type_name: String,
    },
}

/// One entry of `/orgs/{org}/events`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "api::RawEvent")]
pub struct ActivityEvent {
    pub kind: EventKind,
    pub actor: Actor,
    pub repo: RepoRef,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<api::RawEvent> for ActivityEvent {
    type Error = serde_json::Error;

    fn try_from(raw: api::RawEvent) -> Result<Self, Self::Error> {
        let kind = match raw.event_type.as_str() {
            "PushEvent" => {
                let payload: Option<api::PushPayload> = serde_json::from_value(raw.payload)?;
                let commits = payload
                    .and_then(|p| p.commits)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|c| PushCommit { message: c.message })
                    .collect();
                EventKind::Push { commits }
            }
            "CreateEvent" => {
                let payload: api::CreatePayload = serde_json::from_value(raw.payload)?;
                EventKind::Create {
                    ref_type: payload.ref_type,
                    ref_name: payload.ref_name,
                }
            }
            "IssuesEvent" => {
                let payload: api::IssuesPayload = serde_json::from_value(raw.payload)?;
                EventKind::Issues {
                    action: payload.action,
                    title: payload.issue.and_then(|i| i.title),
                }
            }
            "PullRequestEvent" => {
                let payload: api::PullRequestPayload = serde_json::from_value(raw.payload)?;
                EventKind::PullRequest {
                    action: payload.action,
                    title: payload.pull_request.and_then(|p| p.title),
                }
            }
            "ForkEvent" => EventKind::Fork,
            "WatchEvent" => EventKind::Watch,
            _ => EventKind::Other {
                type_name: raw.event_type,
            },
        };

        Ok(ActivityEvent {
            kind,
            actor: raw.actor,
            repo: raw.repo,
            created_at: raw.created_at,
        })
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Contributor {
    pub login: String,
    pub html_url: String,
    pub avatar_url: Option<String>,
    pub contributions: u64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "api::Commit")]
pub struct Commit {
    pub message: String,
    pub author_name: Option<String>,
    pub html_url: String,
}

impl From<api::Commit> for Commit {
    fn from(c: api::Commit) -> Self {
        Commit {
            message: c.commit.message,
            author_name: c.commit.author.map(|a| a.name),
            html_url: c.html_url,
        }
    }
}

/// An open issue. The issues endpoint also lists pull requests; those carry
/// `is_pull_request`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "api::Issue")]
pub struct Issue {
    pub title: String,
    pub html_url: String,
    pub is_pull_request: bool,
}

impl From<api::Issue> for Issue {
    fn from(i: api::Issue) -> Self {
        Issue {
            title: i.title,
            html_url: i.html_url,
            is_pull_request: i.pull_request.is_some(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PullRequest {
    pub title: String,
    pub html_url: String,
}

/// The four collections shown in the details modal for one repository.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailBundle {
    pub contributors: Vec<Contributor>,
    pub commits: Vec<Commit>,
    pub issues: Vec<Issue>,
    pub pulls: Vec<PullRequest>,
}
