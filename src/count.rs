//! Branch counting across an organization
//!
//! Repositories are listed first, then their branches are fetched one
//! repository at a time in listing order. The first failing request aborts
//! the whole count; nothing partial is returned.

use log::{debug, info};

use crate::api::GitHubClient;
use crate::config::Config;
use crate::Result;

/// Repository name to branch count, in the order repositories were listed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchCounts {
    entries: Vec<(String, usize)>,
}

impl BranchCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `count` for `repository`, replacing any earlier value in place
    pub fn insert(&mut self, repository: &str, count: usize) {
        match self.entries.iter_mut().find(|(name, _)| name == repository) {
            Some(entry) => entry.1 = count,
            None => self.entries.push((repository.to_string(), count)),
        }
    }

    pub fn get(&self, repository: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(name, _)| name == repository)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
    }
}

impl<'a> FromIterator<(&'a str, usize)> for BranchCounts {
    fn from_iter<I: IntoIterator<Item = (&'a str, usize)>>(iter: I) -> Self {
        let mut counts = BranchCounts::new();
        for (repository, count) in iter {
            counts.insert(repository, count);
        }
        counts
    }
}

/// Count the branches of every repository the client's organization lists
pub async fn count_branches(client: &GitHubClient) -> Result<BranchCounts> {
    let repos = client.list_repositories().await?;
    info!(
        "Found {} repositories in {}",
        repos.len(),
        client.organization()
    );

    let mut counts = BranchCounts::new();
    for repo in &repos {
        let branches = client.list_branches(repo).await?;
        debug!("{} has {} branches", repo, branches.len());
        counts.insert(repo, branches.len());
    }

    Ok(counts)
}

/// Build a client from `config` and count its organization's branches.
///
/// Fails with `Error::MissingCredentials` before any request is made if the
/// config holds nothing to authenticate with.
pub async fn run(config: &Config) -> Result<BranchCounts> {
    let credentials = config.credentials()?;
    let client = GitHubClient::new(&config.api_base, &config.organization, credentials);
    count_branches(&client).await
}
