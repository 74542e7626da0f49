//! `use_fetch`: one HTTP call with reactive data/loading/error.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call this to load JSON from the API. With `auto_fetch` set, the
//! request fires on mount and again whenever the URL, the request options or
//! the token source change; the returned handle can also trigger it manually.
//! Unmounting aborts whatever is still in flight and freezes the state.
//!
//! Requests only run in the browser (`hydrate`); server renders keep the
//! initial state.

#[cfg(test)]
#[path = "use_fetch_test.rs"]
mod use_fetch_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::config::use_hooks_config;
use crate::net::fetch::{FetchClient, Fetcher};
use crate::net::transport::RequestOptions;
use crate::state::request::RequestState;

pub use crate::net::fetch::TokenSource;

#[derive(Clone, Copy)]
pub struct FetchOptions {
    /// Defaults for every request of this hook instance.
    pub request: Signal<RequestOptions>,
    /// Fetch on mount and on every URL, request or token change.
    pub auto_fetch: bool,
    pub token: Signal<TokenSource>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            request: Signal::stored(RequestOptions::default()),
            auto_fetch: true,
            token: Signal::stored(TokenSource::User),
        }
    }
}

impl FetchOptions {
    /// Only fetch when [`UseFetch::fetch_data`] is called.
    pub fn manual() -> Self {
        Self {
            auto_fetch: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_request(mut self, request: impl Into<Signal<RequestOptions>>) -> Self {
        self.request = request.into();
        self
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<Signal<TokenSource>>) -> Self {
        self.token = token.into();
        self
    }

    #[must_use]
    pub fn with_system_token(self) -> Self {
        self.with_token(Signal::stored(TokenSource::System))
    }
}

/// Everything one request is built from.
#[derive(Clone, Debug, PartialEq, Eq)]
struct FetchTarget {
    url: String,
    token: TokenSource,
    request: RequestOptions,
}

fn fetch_target(
    url: Signal<String>,
    token: Signal<TokenSource>,
    request: Signal<RequestOptions>,
) -> Memo<FetchTarget> {
    Memo::new(move |_| FetchTarget {
        url: url.get(),
        token: token.get(),
        request: request.get(),
    })
}

/// Handle returned by [`use_fetch`].
#[derive(Clone, Copy)]
pub struct UseFetch {
    state: RwSignal<RequestState>,
    target: Memo<FetchTarget>,
    fetcher: StoredValue<Fetcher<RwSignal<RequestState>>, LocalStorage>,
}

impl UseFetch {
    pub fn state(&self) -> ReadSignal<RequestState> {
        self.state.read_only()
    }

    pub fn data(&self) -> Signal<Option<Value>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.data.clone()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.loading))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error.clone()))
    }

    /// Fetch the current URL now, superseding any outstanding request.
    ///
    /// `options` replaces the hook's request defaults for this call only.
    /// Does nothing once the owning view is gone.
    pub fn fetch_data(&self, options: Option<RequestOptions>) {
        let Some(mut target) = self.target.try_get_untracked() else {
            return;
        };
        if let Some(options) = options {
            target.request = options;
        }
        self.spawn_fetch(target);
    }

    /// Abort the outstanding request. Loading clears; no error is set.
    pub fn cancel(&self) {
        if let Some(fetcher) = self.fetcher.try_get_value() {
            fetcher.cancel();
        }
    }

    fn spawn_fetch(&self, target: FetchTarget) {
        #[cfg(feature = "hydrate")]
        {
            let Some(fetcher) = self.fetcher.try_get_value() else {
                return;
            };
            leptos::task::spawn_local(async move {
                let _ = fetcher
                    .fetch(target.url, target.token, target.request)
                    .await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = target;
        }
    }
}

/// Reactive fetch of `url`.
///
/// Uses the [`FetchClient`] from context when one was provided, otherwise the
/// browser client built from the [`crate::HooksConfig`] in context.
pub fn use_fetch(url: impl Into<Signal<String>>, options: FetchOptions) -> UseFetch {
    let client = use_context::<FetchClient>()
        .unwrap_or_else(|| FetchClient::browser(use_hooks_config()));
    let state = RwSignal::new(RequestState::initial(options.auto_fetch));
    let fetcher = StoredValue::new_local(Fetcher::new(client, state));
    let target = fetch_target(url.into(), options.token, options.request);
    let handle = UseFetch {
        state,
        target,
        fetcher,
    };

    if options.auto_fetch {
        Effect::new(move || handle.spawn_fetch(target.get()));
    }

    on_cleanup(move || {
        if let Some(fetcher) = fetcher.try_get_value() {
            fetcher.detach();
        }
    });

    handle
}
