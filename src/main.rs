use console::style;
use env_logger::Env;
use log::debug;
use std::error::Error;

use gh_branch_count::config::{self, Config};
use gh_branch_count::count;
use gh_branch_count::table::{self, COLUMN_NAMES};
use gh_branch_count::util::prompt_secret;

const SECRET_PROMPT: &str = "Enter your token / password";

fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    config::load_env_file();
    init_logging();

    let matches = config::app().get_matches();
    let mut config = Config::from_matches(&matches)?;

    if config.secret.is_none() {
        let secret = prompt_secret(SECRET_PROMPT)?;
        config = config.with_secret(secret);
    } else {
        debug!("Using secret from {}", config::TOKEN_VAR);
    }

    eprintln!(
        "Counting branches in {} via {}",
        style(&config.organization).bold(),
        style(&config.api_base).dim()
    );

    let counts = count::run(&config).await?;
    println!("{}", table::render(&counts, COLUMN_NAMES, config.format));

    Ok(())
}
