//! CLI commands. Each drives a [`Dashboard`] over a headless [`Page`] and
//! prints or exports what the page would display.
//!
//! The status line goes to stderr, markup to stdout. A fetch failure is
//! still printed, then returned so the process exits non-zero.
//!
//! [`Dashboard`]: crate::dashboard::Dashboard
//! [`Page`]: crate::render::Page

mod activity;
pub mod config;
mod details;
mod export;
mod repos;

pub use activity::activity;
pub use details::details;
pub use export::{ExportOptions, export};
pub use repos::repos;

use crate::render::Page;

fn print_status(page: &Page) {
    eprintln!("{}", page.status());
}
