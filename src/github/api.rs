//! Wire shapes of the upstream API that need reshaping before use.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::types::{Actor, RepoRef};

#[derive(Deserialize, Debug)]
pub struct RawEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub actor: Actor,
    pub repo: RepoRef,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub payload: serde_json::Value,
}

#[derive(Deserialize, Debug)]
pub struct PushPayload {
    #[serde(default)]
    pub commits: Option<Vec<PushCommit>>,
}

#[derive(Deserialize, Debug)]
pub struct PushCommit {
    pub message: String,
}

#[derive(Deserialize, Debug)]
pub struct CreatePayload {
    pub ref_type: String,
    #[serde(rename = "ref")]
    pub ref_name: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct IssuesPayload {
    pub action: String,
    #[serde(default)]
    pub issue: Option<Titled>,
}

#[derive(Deserialize, Debug)]
pub struct PullRequestPayload {
    pub action: String,
    #[serde(default)]
    pub pull_request: Option<Titled>,
}

#[derive(Deserialize, Debug)]
pub struct Titled {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct Commit {
    pub html_url: String,
    pub commit: CommitDetail,
}

#[derive(Deserialize, Debug)]
pub struct CommitDetail {
    pub message: String,
    pub author: Option<CommitAuthor>,
}

#[derive(Deserialize, Debug)]
pub struct CommitAuthor {
    pub name: String,
}

#[derive(Deserialize, Debug)]
pub struct Issue {
    pub title: String,
    pub html_url: String,
    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
}
