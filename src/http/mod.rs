//! HTTP client module: one JSON GET per call and a classified failure type.

mod client;
mod error;

pub use client::HttpClient;
pub use error::{FetchError, failure_reason};
