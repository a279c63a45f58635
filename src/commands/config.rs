use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderValue},
};

use crate::github::GitHub;

/// Organization shown when neither `--org` nor `GHDASH_ORG` is given.
pub const DEFAULT_ORG: &str = "acreetionos-linux";

const USER_AGENT: &str = "ghdash";

pub struct Config {
    pub org: String,
    pub api_url: Option<String>,
}

impl Config {
    /// Uses the given organization (from `--org` or `GHDASH_ORG`) unless it is
    /// missing or blank, in which case the default applies.
    pub fn new(org: Option<String>, api_url: Option<String>) -> Self {
        let org = org
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .unwrap_or_else(|| DEFAULT_ORG.to_string());
        debug!("Using organization {}", org);

        Self { org, api_url }
    }

    /// Builds the unauthenticated API client.
    pub fn github(&self) -> Result<GitHub> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(GitHub::new(client, self.api_url.clone(), &self.org))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::OrgApi;

    #[test]
    fn test_explicit_org_wins() {
        let config = Config::new(Some("my-org".into()), None);
        assert_eq!(config.org, "my-org");
    }

    #[test]
    fn test_default_org() {
        assert_eq!(Config::new(None, None).org, DEFAULT_ORG);
        assert_eq!(Config::new(Some("  ".into()), None).org, DEFAULT_ORG);
    }

    #[test]
    fn test_github_uses_api_url() {
        let config = Config::new(Some("o".into()), Some("http://127.0.0.1:1".into()));
        let github = config.github().unwrap();
        assert_eq!(github.api_url(), "http://127.0.0.1:1");
        assert_eq!(github.org(), "o");
    }

    #[tokio::test]
    async fn test_requests_carry_user_agent_and_accept() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();
        let mock = server
            .mock("GET", "/orgs/o/repos")
            .match_header("user-agent", "ghdash")
            .match_header("accept", "application/vnd.github+json")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let config = Config::new(Some("o".into()), Some(url));
        let repos = config.github().unwrap().list_repos().await.unwrap();

        mock.assert_async().await;
        assert!(repos.is_empty());
    }
}
