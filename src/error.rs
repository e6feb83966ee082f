use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Authentication details were not entered for user")]
    MissingCredentials,

    #[error("Unable to make API call, error code: {0}")]
    UnexpectedStatus(u16),

    #[error("No organization given. Pass --organization or set GH_BRANCH_COUNT_ORGANIZATION")]
    MissingOrganization,

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Could not read from the terminal: {0}")]
    Prompt(#[from] io::Error),
}
