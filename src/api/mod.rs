use log::debug;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Credentials, Error, Result};

pub mod branches;
pub mod repos;

pub use branches::Branch;
pub use repos::Repository;

/// Base GitHub API URL
pub const GITHUB_API_BASE: &str = "https://api.github.com";

const USER_AGENT: &str = "gh-branch-count";

/// Authenticated client for a single organization.
///
/// Nothing about it changes after construction; the inner `reqwest::Client`
/// is only there so connections get reused between calls.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: String,
    organization: String,
    credentials: Credentials,
}

impl GitHubClient {
    pub fn new(base_url: &str, organization: &str, credentials: Credentials) -> GitHubClient {
        GitHubClient {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            organization: organization.to_string(),
            credentials,
        }
    }

    /// Resolve credentials and build a client in one step.
    ///
    /// Fails with `Error::MissingCredentials` before any client is built if
    /// neither a username/secret pair nor a non-empty token is usable.
    pub fn from_parts(
        base_url: &str,
        organization: &str,
        username: Option<&str>,
        secret: Option<&str>,
        token: Option<&str>,
    ) -> Result<GitHubClient> {
        let credentials = Credentials::resolve(username, secret, token)?;
        Ok(GitHubClient::new(base_url, organization, credentials))
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn base_request(&self, url: &str) -> RequestBuilder {
        self.http
            .get(url)
            .basic_auth(self.credentials.user(), Some(self.credentials.secret()))
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github.v3+json")
    }

    /// GET `endpoint` relative to the base URL and decode the body as JSON.
    ///
    /// Anything but a 200 fails with `Error::UnexpectedStatus`. There is no
    /// retry and no timeout.
    pub async fn get(&self, endpoint: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {}", url);

        let response = self.base_request(&url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            debug!("GET {} returned {}", url, status);
            return Err(Error::UnexpectedStatus(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET `endpoint` and decode it into a list of `T`
    pub(crate) async fn get_list<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>> {
        let value = self.get(endpoint).await?;
        Ok(serde_json::from_value(value)?)
    }
}
