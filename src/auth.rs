//! Session authentication
//!
//! The only thing the workflow needs from the session is the current user's
//! identifier, attached to each created listing as its owner reference.

use crate::config::Config;
use crate::error::{Error, Result};
use std::env;
use tracing::debug;

/// Source of the user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// `LISTER_USER_ID` environment variable
    EnvVar,
    /// `user_id` key of the config file
    ConfigFile,
}

/// Authenticated user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAuth {
    /// Backend identifier of the current user
    pub user_id: String,
    /// Where the identifier was obtained from
    pub source: AuthSource,
}

/// Resolve the current user
///
/// Priority:
/// 1. `LISTER_USER_ID` environment variable
/// 2. `user_id` in the config file
pub fn get_user_auth(config: &Config) -> Result<UserAuth> {
    debug!("checking LISTER_USER_ID env var");
    if let Ok(id) = env::var("LISTER_USER_ID") {
        let id = id.trim();
        if !id.is_empty() {
            debug!("obtained user id from LISTER_USER_ID env var");
            return Ok(UserAuth {
                user_id: id.to_string(),
                source: AuthSource::EnvVar,
            });
        }
    }

    if let Some(id) = config.user_id.as_deref().map(str::trim)
        && !id.is_empty()
    {
        debug!("obtained user id from config file");
        return Ok(UserAuth {
            user_id: id.to_string(),
            source: AuthSource::ConfigFile,
        });
    }

    debug!("no user id found");
    Err(Error::Auth(
        "No signed-in user. Set LISTER_USER_ID or add user_id to the config file".to_string(),
    ))
}
