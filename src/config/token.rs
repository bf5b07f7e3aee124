//! Bot token resolution.
//!
//! The token is read from the `BOT_TOKEN` environment variable (a `.env` file
//! is loaded into the environment by `main`). When the variable is unset, the
//! first line of `config/token.conf` is used instead. The token format is not
//! validated; Discord rejects a bad token when the client connects.

use crate::errors::{Error, Result};
use std::path::Path;

/// Environment variable holding the bot token.
pub const TOKEN_ENV_VAR: &str = "BOT_TOKEN";

/// Fallback file whose first line holds the bot token.
pub const TOKEN_FILE: &str = "config/token.conf";

/// Loads the token from `BOT_TOKEN`, falling back to [`TOKEN_FILE`].
pub fn load_token() -> Result<String> {
    resolve_token(std::env::var(TOKEN_ENV_VAR).ok(), TOKEN_FILE)
}

/// Picks the token from an already-read environment value or the fallback file.
///
/// An empty or whitespace-only environment value counts as unset.
pub fn resolve_token<P: AsRef<Path>>(from_env: Option<String>, fallback: P) -> Result<String> {
    if let Some(token) = from_env {
        let token = token.trim();
        if !token.is_empty() {
            tracing::debug!("Using bot token from {TOKEN_ENV_VAR}");
            return Ok(token.to_string());
        }
    }

    let path = fallback.as_ref();
    let missing = || Error::MissingToken {
        env_var: TOKEN_ENV_VAR,
        path: path.display().to_string(),
    };

    let contents = std::fs::read_to_string(path).map_err(|e| {
        tracing::debug!("Could not read token file {:?}: {}", path, e);
        missing()
    })?;

    let token = contents.lines().next().map(str::trim).unwrap_or_default();
    if token.is_empty() {
        return Err(missing());
    }

    tracing::debug!("Using bot token from {:?}", path);
    Ok(token.to_string())
}
