//! Backend connection settings baked in at build time.
//!
//! The WASM bundle has no process environment, so the base URL and bearer
//! credential are captured with `option_env!` when the crate is compiled and
//! handed to pages through Leptos context.

use model::config::{ACCESS_TOKEN_VAR, ApiConfig, SERVER_URL_VAR};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const BUILD_SERVER_URL: Option<&str> = option_env!("BOARD_ADMIN_SERVER_URL");
const BUILD_ACCESS_TOKEN: Option<&str> = option_env!("BOARD_ADMIN_ACCESS_TOKEN");

/// Config from build-time variables.
///
/// A missing value is logged once. Without a base URL requests go same-origin;
/// without a token they carry an empty credential for the backend to reject.
pub fn build_api_config() -> ApiConfig {
    config_or_default(BUILD_SERVER_URL, BUILD_ACCESS_TOKEN)
}

fn config_or_default(server_url: Option<&str>, access_token: Option<&str>) -> ApiConfig {
    let lookup = |var: &str| {
        match var {
            SERVER_URL_VAR => server_url,
            ACCESS_TOKEN_VAR => access_token,
            _ => None,
        }
        .map(str::to_owned)
    };
    ApiConfig::from_lookup(lookup).unwrap_or_else(|err| {
        log::warn!("{err} at build time");
        ApiConfig::new(server_url.unwrap_or_default().trim(), access_token.unwrap_or_default().trim())
    })
}
