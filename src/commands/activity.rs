use anyhow::Result;

use crate::{dashboard::Dashboard, render::Page, runtime::Runtime};

use super::{config::Config, print_status};

/// Print the organization's recent activity cards.
#[tracing::instrument(skip(runtime, config))]
pub async fn activity<R: Runtime>(runtime: R, config: Config) -> Result<()> {
    let mut dashboard = Dashboard::new(config.github()?, Page::new(), runtime);
    let result = dashboard.show_activity().await;

    let page = dashboard.surface();
    println!("{}", page.list());
    print_status(page);

    result.map(|_| ())
}
