use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use crate::{
    dashboard::{Dashboard, View},
    render::Page,
    runtime::Runtime,
};

use super::{config::Config, print_status};

#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub output: PathBuf,
    pub view: View,
    pub search: Option<String>,
    /// Repository whose details modal is open in the exported page.
    pub details: Option<String>,
}

/// Drive the dashboard like a page view and write the result as a standalone HTML page.
///
/// The page is written even when a fetch failed; its status line then shows
/// the error, and the first error is returned afterwards.
#[tracing::instrument(skip(runtime, config))]
pub async fn export<R: Runtime>(runtime: R, config: Config, options: ExportOptions) -> Result<()> {
    let mut dashboard = Dashboard::new(config.github()?, Page::new(), runtime);

    let mut first_error = dashboard.start().await.err();

    if let Some(query) = options.search.as_deref() {
        dashboard.search(query);
    }

    if options.view == View::RecentActivity {
        if let Err(e) = dashboard.show_activity().await {
            first_error.get_or_insert(e);
        }
    }

    if let Some(repo) = options.details.as_deref() {
        if let Err(e) = dashboard.show_details(repo).await {
            first_error.get_or_insert(e);
        }
    }

    let document = dashboard.surface().to_document(&config.org);
    dashboard
        .runtime()
        .write(&options.output, document.as_bytes())
        .with_context(|| format!("Failed to export dashboard to {:?}", options.output))?;
    info!("Exported {} view to {:?}", options.view, options.output);

    print_status(dashboard.surface());

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use chrono::{TimeZone, Utc};
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    const REPOS_JSON: &str = r#"[{
        "name": "iso-profiles",
        "description": "Archiso profiles",
        "stargazers_count": 5,
        "forks_count": 1,
        "open_issues_count": 2,
        "language": "Shell",
        "html_url": "https://github.com/test-org/iso-profiles",
        "pushed_at": "2024-05-30T12:00:00Z"
    }]"#;

    fn capturing_runtime(written: Arc<Mutex<Option<(PathBuf, String)>>>) -> MockRuntime {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_now()
            .returning(|| Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());
        runtime
            .expect_write()
            .returning(move |path: &Path, contents: &[u8]| {
                *written.lock().unwrap() = Some((
                    path.to_path_buf(),
                    String::from_utf8_lossy(contents).into_owned(),
                ));
                Ok(())
            });
        runtime
    }

    #[tokio::test]
    async fn test_export_writes_document() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();
        let _repos = server
            .mock("GET", "/orgs/test-org/repos")
            .with_status(200)
            .with_body(REPOS_JSON)
            .create_async()
            .await;

        let written = Arc::new(Mutex::new(None));
        let runtime = capturing_runtime(written.clone());
        let config = Config {
            org: "test-org".into(),
            api_url: Some(url),
        };
        let options = ExportOptions {
            output: PathBuf::from("/out/index.html"),
            ..Default::default()
        };

        export(runtime, config, options).await.unwrap();

        let (path, doc) = written.lock().unwrap().take().unwrap();
        assert_eq!(path, PathBuf::from("/out/index.html"));
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("iso-profiles"));
        assert!(doc.contains("Showing 1 repositories."));
        assert!(doc.contains(r#"<button id="show-all" class="view-toggle active">"#));
    }

    #[tokio::test]
    async fn test_export_failure_still_writes_page() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();
        let _repos = server
            .mock("GET", "/orgs/test-org/repos")
            .with_status(403)
            .create_async()
            .await;

        let written = Arc::new(Mutex::new(None));
        let runtime = capturing_runtime(written.clone());
        let config = Config {
            org: "test-org".into(),
            api_url: Some(url),
        };
        let options = ExportOptions {
            output: PathBuf::from("/out/index.html"),
            ..Default::default()
        };

        let err = export(runtime, config, options).await.unwrap_err();
        assert!(crate::http::failure_reason(&err).contains("403"));

        let (_, doc) = written.lock().unwrap().take().unwrap();
        assert!(doc.contains("Error: HTTP error! status: 403"));
    }
}
