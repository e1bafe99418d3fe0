use crate::{identity::AuthConfig, registrar};
use anyhow::Result;
use secrecy::SecretString;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub dsn: String,
    pub token_secret: SecretString,
    pub token_ttl_seconds: u64,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the database is unreachable or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    info!(
        "Starting {} {} ({}), token ttl {}s",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        short_commit(crate::GIT_COMMIT_HASH),
        args.token_ttl_seconds
    );

    let auth_config =
        AuthConfig::new(args.token_secret).with_token_ttl_seconds(args.token_ttl_seconds);

    registrar::new(args.port, args.dsn, auth_config).await
}

fn short_commit(hash: &str) -> &str {
    let trimmed = hash.trim();
    trimmed.get(..7).unwrap_or(trimmed)
}
