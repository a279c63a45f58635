//! HTTP client issuing a single JSON GET per call.

use anyhow::Result;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::{FetchError, classify_transport};

/// Thin wrapper over a reqwest Client. No retries: each call is one attempt.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request and deserializes the JSON response.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.get_json_with_query(url, &[]).await
    }

    /// Performs a GET request with query parameters and deserializes the JSON response.
    ///
    /// Non-2xx statuses fail with [`FetchError::RequestFailed`], transport
    /// failures with [`FetchError::Network`] and unparseable bodies with
    /// [`FetchError::MalformedResponse`].
    #[tracing::instrument(skip(self, query))]
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        debug!("GET JSON from {} with query {:?}...", url, query);

        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            debug!("GET {} failed with status {}", url, status);
            return Err(FetchError::RequestFailed { status }.into());
        }

        let body = response.text().await.map_err(classify_transport)?;
        let parsed = serde_json::from_str::<T>(&body)
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

        Ok(parsed)
    }
}
