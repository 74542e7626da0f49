//! Fetch cycle for one hook instance.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`FetchClient`] bundles the shared dependencies (config, transport,
//! credential store, navigator). [`Fetcher`] is one hook instance: it owns the
//! single cancellation handle and drives `idle -> loading -> (success | error |
//! aborted)` into a [`RequestSink`]. The URL, token source and request options
//! are passed per call, so the hook can feed in whatever its signals hold now.
//!
//! CANCELLATION
//! ============
//! Starting a fetch aborts the previous one first, so at most one request is
//! outstanding per instance. A generation counter decides who may write state:
//! a superseded run settles silently, a detached instance never writes again.
//!
//! ERROR HANDLING
//! ==============
//! `401` clears the stored token and redirects to the login route without
//! touching data/error. Other failures land in `RequestState::error`.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use futures::future::{AbortHandle, AbortRegistration, Abortable, Aborted, LocalBoxFuture};
use serde_json::Value;

use super::transport::{GlooTransport, HttpRequest, HttpResponse, RequestOptions, Transport};
use crate::config::HooksConfig;
use crate::error::FetchError;
use crate::state::request::{RequestSink, RequestState};
use crate::util::navigation::{BrowserNavigator, Navigator};
use crate::util::storage::{CredentialStore, LocalStorage};

const CONTENT_TYPE_HEADER: &str = "Content-Type";
const JSON_CONTENT_TYPE: &str = "application/json";
const STATUS_UNAUTHORIZED: u16 = 401;

/// Which token goes into the assertion header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenSource {
    /// The signed-in user's token from credential storage.
    #[default]
    User,
    /// The configured system token.
    System,
}

/// Shared dependencies of every fetch. Cheap to clone.
#[derive(Clone)]
pub struct FetchClient {
    config: Arc<HooksConfig>,
    transport: Arc<dyn Transport>,
    store: Arc<dyn CredentialStore>,
    navigator: Arc<dyn Navigator + Send + Sync>,
}

impl FetchClient {
    pub fn new(
        config: HooksConfig,
        transport: Arc<dyn Transport>,
        store: Arc<dyn CredentialStore>,
        navigator: Arc<dyn Navigator + Send + Sync>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            transport,
            store,
            navigator,
        }
    }

    /// `gloo-net` transport, `localStorage`, and `window.location`.
    pub fn browser(config: HooksConfig) -> Self {
        Self::new(
            config,
            Arc::new(GlooTransport),
            Arc::new(LocalStorage),
            Arc::new(BrowserNavigator),
        )
    }

    pub fn config(&self) -> &HooksConfig {
        &self.config
    }

    /// Token for the assertion header; empty when none is available.
    pub fn token(&self, source: TokenSource) -> String {
        match source {
            TokenSource::User => self.store.read(&self.config.token_storage_key),
            TokenSource::System => self.config.system_token.clone(),
        }
        .unwrap_or_default()
    }

    /// Resolve `options` into a request with the fixed headers applied.
    ///
    /// Caller headers come after the JSON content type and may replace it;
    /// the assertion header is always the token from `source`.
    pub fn build_request(
        &self,
        url: &str,
        source: TokenSource,
        options: &RequestOptions,
    ) -> HttpRequest {
        let mut request = HttpRequest {
            url: url.to_owned(),
            method: options.method.unwrap_or_default(),
            headers: vec![(CONTENT_TYPE_HEADER.to_owned(), JSON_CONTENT_TYPE.to_owned())],
            body: options.body.clone(),
        };
        for (name, value) in &options.headers {
            request.set_header(name, value);
        }
        request.set_header(&self.config.assertion_header, &self.token(source));
        request
    }

    /// Map a settled response to data or a [`FetchError`]. Pure: no logout here.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for `401`, `Status` for other non-2xx, `Decode` for a
    /// success body that is not JSON.
    pub fn interpret(&self, response: &HttpResponse) -> Result<Value, FetchError> {
        if response.status == STATUS_UNAUTHORIZED {
            return Err(FetchError::Unauthorized);
        }
        if response.is_success() {
            if response.body.trim().is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_str(&response.body)?);
        }
        let message = serde_json::from_str::<Value>(&response.body)
            .ok()
            .and_then(|body| body.get("message").and_then(Value::as_str).map(str::to_owned))
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| self.config.fallback_error.clone());
        Err(FetchError::Status {
            status: response.status,
            message,
        })
    }

    /// Drop the stored user token and leave for the login route.
    pub fn logout(&self) {
        leptos::logging::warn!(
            "unauthorized response, redirecting to {}",
            self.config.login_route
        );
        self.store.remove(&self.config.token_storage_key);
        self.navigator.redirect(&self.config.login_route);
    }

    /// Send `request` through the transport, abortable through `registration`.
    async fn send(
        &self,
        request: HttpRequest,
        registration: AbortRegistration,
    ) -> Result<Value, FetchError> {
        match Abortable::new(self.transport.send(request), registration).await {
            Ok(Ok(response)) => self.interpret(&response),
            Ok(Err(e)) => Err(e.into()),
            Err(Aborted) => Err(FetchError::Aborted),
        }
    }
}

struct FetcherInner<S> {
    client: FetchClient,
    sink: S,
    generation: Cell<u64>,
    inflight: RefCell<Option<AbortHandle>>,
    detached: Cell<bool>,
}

/// One fetch hook instance. Clones share the same cancellation handle.
pub struct Fetcher<S> {
    inner: Rc<FetcherInner<S>>,
}

impl<S> Clone for Fetcher<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: RequestSink> Fetcher<S> {
    pub fn new(client: FetchClient, sink: S) -> Self {
        Self {
            inner: Rc::new(FetcherInner {
                client,
                sink,
                generation: Cell::new(0),
                inflight: RefCell::new(None),
                detached: Cell::new(false),
            }),
        }
    }

    pub fn client(&self) -> &FetchClient {
        &self.inner.client
    }

    pub fn sink(&self) -> &S {
        &self.inner.sink
    }

    /// Cancel any outstanding request and fetch `url` with `token` and `options`.
    pub fn fetch(
        &self,
        url: impl Into<String>,
        token: TokenSource,
        options: RequestOptions,
    ) -> LocalBoxFuture<'static, Result<Value, FetchError>> {
        let inner = Rc::clone(&self.inner);
        Box::pin(inner.run(url.into(), token, options))
    }

    /// Abort the outstanding request, if any. Loading is cleared, error is not set.
    pub fn cancel(&self) {
        if let Some(handle) = self.inner.inflight.borrow_mut().take() {
            handle.abort();
        }
    }

    /// Teardown: abort the outstanding request and ignore every later result.
    pub fn detach(&self) {
        self.inner.detached.set(true);
        self.cancel();
    }

    pub fn is_detached(&self) -> bool {
        self.inner.detached.get()
    }

    /// Whether a request is outstanding.
    pub fn has_pending(&self) -> bool {
        self.inner.inflight.borrow().is_some()
    }
}

impl<S: RequestSink> FetcherInner<S> {
    async fn run(
        self: Rc<Self>,
        url: String,
        token: TokenSource,
        options: RequestOptions,
    ) -> Result<Value, FetchError> {
        if self.detached.get() {
            return Err(FetchError::Aborted);
        }

        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.inflight.replace(Some(handle)) {
            leptos::logging::log!("superseding in-flight request for {url}");
            previous.abort();
        }
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        self.sink.apply(&mut RequestState::begin);

        let request = self.client.build_request(&url, token, &options);
        let outcome = self.client.send(request, registration).await;

        // A newer run or a teardown owns the state now.
        if self.detached.get() || self.generation.get() != generation {
            return Err(FetchError::Aborted);
        }
        self.inflight.borrow_mut().take();

        match &outcome {
            Ok(data) => self
                .sink
                .apply(&mut |state: &mut RequestState| state.succeed(data.clone())),
            Err(FetchError::Unauthorized) => {
                self.client.logout();
                self.sink.apply(&mut RequestState::settle);
            }
            Err(err) => match err.message() {
                Some(message) => {
                    leptos::logging::warn!("fetch {url} failed: {message}");
                    self.sink
                        .apply(&mut |state: &mut RequestState| state.fail(message.clone()));
                }
                None => self.sink.apply(&mut RequestState::settle),
            },
        }
        outcome
    }
}
