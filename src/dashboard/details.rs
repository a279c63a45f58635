//! Detail bundle loading for the repository modal.

use anyhow::Result;
use log::debug;
use tokio_util::sync::CancellationToken;

use crate::github::{DetailBundle, OrgApi};

/// Fetches the four detail collections of one repository concurrently.
///
/// All four must succeed; the first failure aborts the join and is returned.
#[tracing::instrument(skip(api))]
pub async fn fetch_bundle<A: OrgApi + ?Sized>(api: &A, repo: &str) -> Result<DetailBundle> {
    let (contributors, commits, issues, pulls) = tokio::try_join!(
        api.list_contributors(repo),
        api.list_commits(repo),
        api.list_open_issues(repo),
        api.list_open_pulls(repo),
    )?;

    debug!(
        "Loaded details for {}: {} contributors, {} commits, {} issues, {} pull requests",
        repo,
        contributors.len(),
        commits.len(),
        issues.len(),
        pulls.len()
    );

    Ok(DetailBundle {
        contributors,
        commits,
        issues,
        pulls,
    })
}

/// How a detail load ended.
#[derive(Debug)]
pub enum DetailOutcome {
    Loaded(DetailBundle),
    Failed(anyhow::Error),
    /// The modal was closed or replaced before the fetches settled.
    Cancelled,
}

/// One opening of the details modal. Closing the modal cancels its token.
#[derive(Debug)]
pub struct DetailSession {
    repo: String,
    generation: u64,
    token: CancellationToken,
}

impl DetailSession {
    pub(crate) fn new(repo: &str, generation: u64, token: CancellationToken) -> Self {
        Self {
            repo: repo.to_string(),
            generation,
            token,
        }
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Runs the four fetches unless the session is cancelled first.
    #[tracing::instrument(skip(self, api), fields(repo = %self.repo))]
    pub async fn load<A: OrgApi + ?Sized>(&self, api: &A) -> DetailOutcome {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                debug!("Detail load for {} cancelled", self.repo);
                DetailOutcome::Cancelled
            }
            result = fetch_bundle(api, &self.repo) => match result {
                Ok(bundle) => DetailOutcome::Loaded(bundle),
                Err(e) => DetailOutcome::Failed(e),
            },
        }
    }
}
