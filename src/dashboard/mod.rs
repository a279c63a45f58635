//! View controller: owns the session state and drives fetches into the page.
//!
//! The controller holds the only mutable state of a page view: the store of
//! last-fetched records, the active [`View`], the search query and the open
//! details modal. Every fetch path reports its outcome on the status line.
//! A failure never clears the card list; it only changes the status text.

mod details;
mod view;

use anyhow::Result;
use log::{debug, info, warn};
use tokio_util::sync::CancellationToken;

use crate::github::OrgApi;
use crate::http::failure_reason;
use crate::render::{self, Surface};
use crate::runtime::Runtime;
use crate::store::RepoStore;

pub use details::{DetailOutcome, DetailSession, fetch_bundle};
pub use view::View;

pub const LOADING_REPOS: &str = "Loading organization repositories...";
pub const LOADING_EVENTS: &str = "Loading recent activity...";

/// Status line after a repository list is shown.
pub fn repos_status(count: usize) -> String {
    format!("Showing {} repositories.", count)
}

/// Status line after the activity list is shown.
pub fn events_status(count: usize) -> String {
    format!("Showing recent activity ({} events).", count)
}

/// Status line for a failed fetch.
pub fn error_status(error: &anyhow::Error) -> String {
    format!("Error: {}", failure_reason(error))
}

#[derive(Debug)]
struct OpenModal {
    generation: u64,
    token: CancellationToken,
}

/// Drives fetches for one organization into a [`Surface`].
pub struct Dashboard<A: OrgApi, S: Surface, R: Runtime> {
    api: A,
    surface: S,
    runtime: R,
    store: RepoStore,
    view: View,
    query: String,
    modal: Option<OpenModal>,
    generation: u64,
}

impl<A: OrgApi, S: Surface, R: Runtime> Dashboard<A, S, R> {
    pub fn new(api: A, surface: S, runtime: R) -> Self {
        Self {
            api,
            surface,
            runtime,
            store: RepoStore::new(),
            view: View::AllRepos,
            query: String::new(),
            modal: None,
            generation: 0,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn store(&self) -> &RepoStore {
        &self.store
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Initial page load: highlight the repositories view and fetch it.
    #[tracing::instrument(skip(self))]
    pub async fn start(&mut self) -> Result<usize> {
        info!("Starting dashboard for {}", self.api.org());
        self.load_repositories().await
    }

    /// Fetches the organization's repositories and shows those matching the
    /// current query.
    ///
    /// Returns the number of repositories fetched, or the fetch error after it
    /// has been reported on the status line.
    #[tracing::instrument(skip(self))]
    pub async fn load_repositories(&mut self) -> Result<usize> {
        self.activate(View::AllRepos);
        self.surface.set_status(LOADING_REPOS);

        match self.api.list_repos().await {
            Ok(repos) => {
                let count = repos.len();
                debug!("Fetched {} repositories", count);
                self.store.replace_repos(repos);
                self.show_repos();
                Ok(count)
            }
            Err(e) => {
                warn!("Failed to load repositories: {:#}", e);
                self.surface.set_status(&error_status(&e));
                Err(e)
            }
        }
    }

    /// Fetches the organization's recent events and shows them.
    #[tracing::instrument(skip(self))]
    pub async fn load_events(&mut self) -> Result<usize> {
        self.surface.set_status(LOADING_EVENTS);

        match self.api.list_events().await {
            Ok(events) => {
                let count = events.len();
                debug!("Fetched {} events", count);
                self.store.replace_events(events);
                let html = render::event_list(self.store.events(), self.runtime.now());
                self.surface.set_list(html);
                self.surface.set_status(&events_status(count));
                Ok(count)
            }
            Err(e) => {
                warn!("Failed to load events: {:#}", e);
                self.surface.set_status(&error_status(&e));
                Err(e)
            }
        }
    }

    /// Switches to the activity view, which always refetches events.
    #[tracing::instrument(skip(self))]
    pub async fn show_activity(&mut self) -> Result<usize> {
        self.activate(View::RecentActivity);
        self.load_events().await
    }

    /// Switches back to the repositories view using the held snapshot.
    /// Returns the number of cards shown.
    pub fn show_all(&mut self) -> usize {
        self.activate(View::AllRepos);
        self.show_repos()
    }

    /// Updates the search query. The repository list and its count are
    /// re-rendered at once when visible, otherwise on the next return to it.
    ///
    /// Returns how many repositories match.
    pub fn search(&mut self, query: &str) -> usize {
        self.query = query.to_string();
        self.surface.set_search(query);
        if self.view == View::AllRepos {
            self.show_repos()
        } else {
            self.store.filter(&self.query).len()
        }
    }

    /// Opens the modal for `repo` in its loading state.
    ///
    /// Any previously open session is cancelled.
    pub fn open_details(&mut self, repo: &str) -> DetailSession {
        if let Some(previous) = self.modal.take() {
            previous.token.cancel();
        }

        self.generation += 1;
        let token = CancellationToken::new();
        self.modal = Some(OpenModal {
            generation: self.generation,
            token: token.clone(),
        });
        self.surface.open_modal(repo, render::modal_loading());

        DetailSession::new(repo, self.generation, token)
    }

    /// Renders the outcome of `session` if it is still the open modal.
    pub fn finish_details(&mut self, session: DetailSession, outcome: DetailOutcome) -> Result<()> {
        let current = self
            .modal
            .as_ref()
            .is_some_and(|m| m.generation == session.generation());
        if !current || !self.surface.is_modal_open() {
            debug!("Discarding stale details for {}", session.repo());
            return Ok(());
        }

        match outcome {
            DetailOutcome::Loaded(bundle) => {
                self.surface.set_modal_body(render::modal_sections(&bundle));
                Ok(())
            }
            DetailOutcome::Failed(e) => {
                warn!("Failed to load details for {}: {:#}", session.repo(), e);
                self.surface
                    .set_modal_body(render::modal_error(&failure_reason(&e)));
                Err(e)
            }
            DetailOutcome::Cancelled => Ok(()),
        }
    }

    /// Closes the modal and cancels its in-flight fetches.
    pub fn close_details(&mut self) {
        if let Some(open) = self.modal.take() {
            open.token.cancel();
        }
        self.surface.close_modal();
    }

    /// Opens the modal for `repo`, loads its detail bundle and renders it.
    #[tracing::instrument(skip(self))]
    pub async fn show_details(&mut self, repo: &str) -> Result<()> {
        let session = self.open_details(repo);
        let outcome = session.load(&self.api).await;
        self.finish_details(session, outcome)
    }

    fn activate(&mut self, view: View) {
        self.view = view;
        self.surface.set_active_view(view);
    }

    /// Paints the repositories matching the current query and counts them on
    /// the status line.
    fn show_repos(&mut self) -> usize {
        let matching = self.store.filter(&self.query);
        let count = matching.len();
        let html = render::repo_list(&matching);
        self.surface.set_list(html);
        self.surface.set_status(&repos_status(count));
        count
    }
}
