use anyhow::Result;
use log::debug;

use crate::{dashboard::Dashboard, render::Page, runtime::Runtime};

use super::{config::Config, print_status};

/// Print the organization's repository cards, optionally filtered.
#[tracing::instrument(skip(runtime, config))]
pub async fn repos<R: Runtime>(runtime: R, config: Config, search: Option<String>) -> Result<()> {
    let mut dashboard = Dashboard::new(config.github()?, Page::new(), runtime);
    let result = dashboard.start().await;

    if let Some(query) = search.as_deref() {
        let matches = dashboard.search(query);
        debug!("{} repositories match {:?}", matches, query);
    }

    let page = dashboard.surface();
    println!("{}", page.list());
    print_status(page);

    result.map(|_| ())
}
