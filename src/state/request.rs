//! Request state for one fetch hook instance.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views render `data`/`loading`/`error` directly. Transitions are applied by
//! the fetcher through a [`RequestSink`] so the same logic can feed a Leptos
//! signal in the browser and a recorder in tests.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use leptos::prelude::*;
use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestState {
    pub data: Option<Value>,
    pub loading: bool,
    pub error: Option<String>,
}

impl RequestState {
    /// Initial state. A hook that fetches on mount starts out loading.
    pub fn initial(loading: bool) -> Self {
        Self {
            data: None,
            loading,
            error: None,
        }
    }

    /// Start of a fetch: loading, no error. Previous data stays visible.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn succeed(&mut self, data: Value) {
        self.data = Some(data);
        self.error = None;
        self.loading = false;
    }

    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    /// Settle without touching data or error (cancellation, forced logout).
    pub fn settle(&mut self) {
        self.loading = false;
    }
}

/// Receiver of request-state transitions.
pub trait RequestSink: 'static {
    fn apply(&self, change: &mut dyn FnMut(&mut RequestState));
}

impl RequestSink for RwSignal<RequestState> {
    fn apply(&self, change: &mut dyn FnMut(&mut RequestState)) {
        // Disposed after unmount; nothing left to render.
        self.try_update(|state| change(state));
    }
}
