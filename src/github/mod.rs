//! Records and client for the upstream source-hosting REST API.

mod api;
mod client;
mod types;

#[cfg(test)]
pub use client::MockOrgApi;
pub use client::{DEFAULT_API_URL, DETAILS_PER_PAGE, EVENTS_PER_PAGE, GitHub, OrgApi};
pub use types::{
    ActivityEvent, Actor, Commit, Contributor, DetailBundle, EventKind, Issue, PullRequest,
    PushCommit, RepoRef, Repository,
};
