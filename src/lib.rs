pub mod api;
pub mod config;
pub mod count;
pub mod error;
pub mod table;
pub mod util;

pub use error::{Error, Result};

/// Basic-auth user sent alongside a bare access token
pub const TOKEN_USER: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    // Username with password or personal access token
    Basic { username: String, secret: String },
    // Personal access token on its own
    Token { token: String },
}

impl Credentials {
    /// Pick the usable credential out of whatever the user supplied.
    ///
    /// A username with a non-empty secret wins; otherwise a non-empty token is
    /// used. With neither, this fails with `Error::MissingCredentials`.
    pub fn resolve(
        username: Option<&str>,
        secret: Option<&str>,
        token: Option<&str>,
    ) -> Result<Credentials> {
        match (username, secret, token) {
            (Some(username), Some(secret), _) if !secret.is_empty() => Ok(Credentials::Basic {
                username: username.to_string(),
                secret: secret.to_string(),
            }),
            (_, _, Some(token)) if !token.is_empty() => Ok(Credentials::Token {
                token: token.to_string(),
            }),
            _ => Err(Error::MissingCredentials),
        }
    }

    pub(crate) fn user(&self) -> &str {
        match self {
            Credentials::Basic { username, .. } => username,
            Credentials::Token { .. } => TOKEN_USER,
        }
    }

    pub(crate) fn secret(&self) -> &str {
        match self {
            Credentials::Basic { secret, .. } => secret,
            Credentials::Token { token } => token,
        }
    }
}
