//! Run configuration
//!
//! Every setting comes from a command-line flag first, then an environment
//! variable, then a default. Environment variables may also be placed in a
//! `.gh-branch-count.env` file in the working directory.

use clap::{App, AppSettings, Arg, ArgMatches};
use std::env;

use crate::api::GITHUB_API_BASE;
use crate::table::Format;
use crate::{Credentials, Error, Result};

pub const ENV_FILE: &str = ".gh-branch-count.env";

pub const ORGANIZATION_VAR: &str = "GH_BRANCH_COUNT_ORGANIZATION";
pub const USERNAME_VAR: &str = "GH_BRANCH_COUNT_USERNAME";
pub const TOKEN_VAR: &str = "GH_BRANCH_COUNT_TOKEN";
pub const API_URL_VAR: &str = "GH_BRANCH_COUNT_API_URL";

pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("gh-branch-count")
        .about("Github organization branch count")
        .setting(AppSettings::DisableVersion)
        .arg(
            Arg::with_name("username")
                .long("username")
                .short("u")
                .takes_value(true)
                .help("The username to authenticate as"),
        )
        .arg(
            Arg::with_name("organization")
                .long("organization")
                .short("o")
                .takes_value(true)
                .help("The organization whose repositories are counted"),
        )
        .arg(
            Arg::with_name("api-url")
                .long("api-url")
                .takes_value(true)
                .value_name("URL")
                .help("Github API base URL (default: https://api.github.com)"),
        )
        .arg(
            Arg::with_name("format")
                .long("format")
                .short("f")
                .takes_value(true)
                .possible_values(&["plain", "markdown"])
                .default_value("plain")
                .help("How to print the table"),
        )
}

/// Load `.gh-branch-count.env` if there is one. Variables that are already
/// set are left alone.
pub fn load_env_file() {
    dotenvy::from_filename(ENV_FILE).ok();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base: String,
    pub organization: String,
    pub username: Option<String>,
    // Password or token; the same value is tried as both
    pub secret: Option<String>,
    pub format: Format,
}

impl Config {
    pub fn from_matches(m: &ArgMatches) -> Result<Config> {
        Config::from_sources(m, |key| env::var(key).ok())
    }

    pub fn from_sources<F>(m: &ArgMatches, env: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|value| !value.is_empty());

        let organization = m
            .value_of("organization")
            .map(String::from)
            .or_else(|| lookup(ORGANIZATION_VAR))
            .filter(|org| !org.is_empty())
            .ok_or(Error::MissingOrganization)?;

        let username = m
            .value_of("username")
            .map(String::from)
            .or_else(|| lookup(USERNAME_VAR));

        let api_base = m
            .value_of("api-url")
            .map(String::from)
            .or_else(|| lookup(API_URL_VAR))
            .unwrap_or_else(|| GITHUB_API_BASE.to_string());

        let format = m
            .value_of("format")
            .and_then(|f| f.parse().ok())
            .unwrap_or_default();

        Ok(Config {
            api_base,
            organization,
            username,
            secret: lookup(TOKEN_VAR),
            format,
        })
    }

    pub fn with_secret(mut self, secret: String) -> Config {
        self.secret = Some(secret);
        self
    }

    /// The secret stands in for both the password and the token
    pub fn credentials(&self) -> Result<Credentials> {
        let secret = self.secret.as_deref();
        Credentials::resolve(self.username.as_deref(), secret, secret)
    }
}
