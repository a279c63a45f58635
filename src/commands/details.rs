use anyhow::Result;

use crate::{dashboard::Dashboard, render::Page, runtime::Runtime};

use super::config::Config;

/// Print the details modal of one repository.
#[tracing::instrument(skip(runtime, config))]
pub async fn details<R: Runtime>(runtime: R, config: Config, repo: &str) -> Result<()> {
    let mut dashboard = Dashboard::new(config.github()?, Page::new(), runtime);
    let result = dashboard.show_details(repo).await;

    if let Some(body) = dashboard.surface().modal_body() {
        println!("{}", body);
    }

    result
}
