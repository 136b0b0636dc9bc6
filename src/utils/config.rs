/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Environment readers behind [`Config::new`](crate::application::config::Config::new)
//!
//! Every reader trims the raw value and treats a blank variable as unset, so a
//! `.env` line such as `CHATWOOT_ACCOUNT_ID=` behaves like a missing one.

use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{error, warn};

/// Trimmed value of a variable, or `None` when it is unset or blank
fn read_env(env_var: &str) -> Option<String> {
    env::var(env_var)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - Value used when the variable is unset, blank or does not parse
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match read_env(env_var) {
        Some(val) => val.parse::<T>().unwrap_or_else(|e| {
            error!("Failed to parse {}: {} ({:?}), using default", env_var, val, e);
            default
        }),
        None => default,
    }
}

/// Gets an environment variable and parses it
///
/// Unset and blank variables are `None`. A value that does not parse is logged
/// and also treated as `None`.
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    let val = read_env(env_var)?;
    match val.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Ignoring {}: cannot parse {} ({:?})", env_var, val, e);
            None
        }
    }
}

/// Gets a boolean flag
///
/// Accepts `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off` in any case.
/// Anything else is logged and yields `default`.
pub fn get_env_flag(env_var: &str, default: bool) -> bool {
    let Some(val) = read_env(env_var) else {
        return default;
    };
    match parse_flag(&val) {
        Some(flag) => flag,
        None => {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }
    }
}

/// Parses the flag spellings accepted by [`get_env_flag`]
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Gets a comma-separated environment variable as a list of trimmed, non-empty entries
///
/// A missing variable yields an empty list.
pub fn get_env_list(env_var: &str) -> Vec<String> {
    read_env(env_var)
        .map(|val| split_list(&val))
        .unwrap_or_default()
}

/// Splits a comma-separated string into trimmed, non-empty entries
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
