use crate::{
    cli::{
        actions::{server::Args, Action},
        commands::auth::{ARG_TOKEN_SECRET, ARG_TOKEN_TTL_SECONDS},
    },
    identity::{manager::DEFAULT_TOKEN_TTL_SECONDS, token::MIN_SECRET_BYTES},
};
use anyhow::{ensure, Context, Result};
use secrecy::SecretString;

/// # Errors
/// Returns an error if required arguments are missing or the token secret is too short.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);
    let dsn = matches
        .get_one::<String>("dsn")
        .cloned()
        .context("missing required argument: --dsn")?;

    let token_secret = matches
        .get_one::<String>(ARG_TOKEN_SECRET)
        .cloned()
        .context("missing required argument: --token-secret")?;
    ensure!(
        token_secret.len() >= MIN_SECRET_BYTES,
        "--token-secret must be at least {MIN_SECRET_BYTES} bytes"
    );

    let token_ttl_seconds = matches
        .get_one::<u64>(ARG_TOKEN_TTL_SECONDS)
        .copied()
        .unwrap_or(DEFAULT_TOKEN_TTL_SECONDS);

    Ok(Action::Server(Args {
        port,
        dsn,
        token_secret: SecretString::from(token_secret),
        token_ttl_seconds,
    }))
}
