//! Request/response shapes and the HTTP transport seam.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and host tests: [`GlooTransport`] answers
//! [`TransportError::Unavailable`] since the browser network is absent.
//!
//! Cancellation is by drop: dropping the future returned by
//! [`Transport::send`] aborts the browser request through its
//! `AbortController`.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use crate::error::TransportError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}

/// Per-call overrides layered over the fixed request headers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// `None` means `GET`.
    pub method: Option<Method>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `payload` as the request body.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `payload` cannot be represented as JSON.
    pub fn with_json<T: Serialize>(self, payload: &T) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(payload)?;
        Ok(self.with_body(body))
    }
}

/// Fully resolved outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Set `name`, replacing any header with the same case-insensitive name.
    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.to_owned()));
    }
}

/// Settled response with the body fully read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Response future of a [`Transport`]. Dropping it cancels the request.
pub type TransportFuture = LocalBoxFuture<'static, Result<HttpResponse, TransportError>>;

pub trait Transport: Send + Sync {
    /// Send `request` and read the whole body.
    fn send(&self, request: HttpRequest) -> TransportFuture;
}

/// Browser `fetch` through `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    fn send(&self, request: HttpRequest) -> TransportFuture {
        #[cfg(feature = "hydrate")]
        {
            Box::pin(send_with_gloo(request))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Box::pin(async { Err(TransportError::Unavailable) })
        }
    }
}

#[cfg(feature = "hydrate")]
fn gloo_method(method: Method) -> gloo_net::http::Method {
    match method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
        Method::Put => gloo_net::http::Method::PUT,
        Method::Patch => gloo_net::http::Method::PATCH,
        Method::Delete => gloo_net::http::Method::DELETE,
        Method::Head => gloo_net::http::Method::HEAD,
        Method::Options => gloo_net::http::Method::OPTIONS,
    }
}

/// Aborts the browser request when dropped before completion.
#[cfg(feature = "hydrate")]
struct AbortOnDrop {
    controller: Option<web_sys::AbortController>,
}

#[cfg(feature = "hydrate")]
impl AbortOnDrop {
    fn new() -> Self {
        Self {
            controller: web_sys::AbortController::new().ok(),
        }
    }

    fn signal(&self) -> Option<web_sys::AbortSignal> {
        self.controller
            .as_ref()
            .map(web_sys::AbortController::signal)
    }

    fn disarm(mut self) {
        self.controller = None;
    }
}

#[cfg(feature = "hydrate")]
impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if let Some(controller) = self.controller.take() {
            controller.abort();
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send_with_gloo(request: HttpRequest) -> Result<HttpResponse, TransportError> {
    let guard = AbortOnDrop::new();
    let signal = guard.signal();

    let mut builder = gloo_net::http::RequestBuilder::new(&request.url)
        .method(gloo_method(request.method))
        .abort_signal(signal.as_ref());
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let built = match request.body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

    let resp = built
        .send()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;
    guard.disarm();
    Ok(HttpResponse { status, body })
}
