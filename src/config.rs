//! Hook configuration shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The fetch hook needs a handful of deployment constants (where the user token
//! lives, which header carries it, where to send a logged-out user). Apps call
//! [`provide_hooks_config`] once near the root; hooks fall back to
//! [`HooksConfig::default`] when nothing was provided.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::*;

pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";
pub const DEFAULT_LOGIN_ROUTE: &str = "/login";
pub const DEFAULT_ASSERTION_HEADER: &str = "X-JWT-Assertion";
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong";

/// Build-time system token used when a hook asks for [`crate::TokenSource::System`].
const SYSTEM_TOKEN: Option<&str> = option_env!("CLIENT_HOOKS_SYSTEM_TOKEN");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HooksConfig {
    /// `localStorage` key holding the user's token.
    pub token_storage_key: String,
    /// Route loaded after a `401` clears the stored token.
    pub login_route: String,
    /// Request header carrying the token.
    pub assertion_header: String,
    /// Fixed token for system-level calls. `None` sends an empty header.
    pub system_token: Option<String>,
    /// Error shown when a failed response carries no `message`.
    pub fallback_error: String,
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self {
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_owned(),
            login_route: DEFAULT_LOGIN_ROUTE.to_owned(),
            assertion_header: DEFAULT_ASSERTION_HEADER.to_owned(),
            system_token: system_token_from_build(SYSTEM_TOKEN),
            fallback_error: DEFAULT_ERROR_MESSAGE.to_owned(),
        }
    }
}

impl HooksConfig {
    #[must_use]
    pub fn with_token_storage_key(mut self, key: impl Into<String>) -> Self {
        self.token_storage_key = key.into();
        self
    }

    #[must_use]
    pub fn with_login_route(mut self, route: impl Into<String>) -> Self {
        self.login_route = route.into();
        self
    }

    #[must_use]
    pub fn with_assertion_header(mut self, header: impl Into<String>) -> Self {
        self.assertion_header = header.into();
        self
    }

    #[must_use]
    pub fn with_system_token(mut self, token: Option<String>) -> Self {
        self.system_token = token;
        self
    }

    #[must_use]
    pub fn with_fallback_error(mut self, message: impl Into<String>) -> Self {
        self.fallback_error = message.into();
        self
    }
}

fn system_token_from_build(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
}

/// Make `config` available to every hook below the current owner.
pub fn provide_hooks_config(config: HooksConfig) {
    provide_context(config);
}

/// Config from context, or the defaults when none was provided.
pub fn use_hooks_config() -> HooksConfig {
    use_context::<HooksConfig>().unwrap_or_default()
}
