//! Browser location/history behind a small trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! Query-param mutators read the current entry and rewrite it in place; the
//! fetch path sends a logged-out user to the login route with a full page
//! load. [`BrowserNavigator`] talks to `window.history` directly,
//! [`MemoryNavigator`] records entries for tests, and the hook layer adds a
//! router-aware navigator so `leptos_router` memos stay in sync.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::sync::Mutex;

use super::route_state::RouteState;

/// One history entry as the hooks see it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Location {
    pub pathname: String,
    /// Search string including the leading `?`, or empty.
    pub search: String,
    pub state: RouteState,
}

impl Location {
    /// Split `/path?query` into path and search. A fragment is discarded.
    pub fn from_href(href: &str) -> Self {
        let href = href.split_once('#').map_or(href, |(before, _)| before);
        let (pathname, search) = match href.find('?') {
            Some(idx) => (&href[..idx], &href[idx..]),
            None => (href, ""),
        };
        let search = if search == "?" { "" } else { search };
        Self {
            pathname: pathname.to_owned(),
            search: search.to_owned(),
            state: RouteState::default(),
        }
    }

    #[must_use]
    pub fn with_state(mut self, state: RouteState) -> Self {
        self.state = state;
        self
    }

    pub fn href(&self) -> String {
        format!("{}{}", self.pathname, self.search)
    }
}

pub trait Navigator {
    /// Snapshot of the current entry.
    fn location(&self) -> Location;
    /// Overwrite the current entry. Never adds a history entry.
    fn replace(&self, target: &Location);
    /// Leave the app for `href` (full page load in the browser).
    fn redirect(&self, href: &str);
}

/// `window.location` + `window.history`. No-op outside the `hydrate` build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn location(&self) -> Location {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return Location::default();
            };
            let location = window.location();
            let state = window
                .history()
                .and_then(|h| h.state())
                .ok()
                .map(state_from_js)
                .unwrap_or_default();
            Location {
                pathname: location.pathname().unwrap_or_default(),
                search: location.search().unwrap_or_default(),
                state,
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Location::default()
        }
    }

    fn replace(&self, target: &Location) {
        #[cfg(feature = "hydrate")]
        {
            let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
                return;
            };
            let state = state_to_js(&target.state);
            if let Err(e) = history.replace_state_with_url(&state, "", Some(&target.href())) {
                leptos::logging::warn!("history replace failed: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = target;
        }
    }

    fn redirect(&self, href: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href(href);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = href;
        }
    }
}

/// Convert a history state value (any JS value) into [`RouteState`].
#[cfg(feature = "hydrate")]
pub(crate) fn state_from_js(value: wasm_bindgen::JsValue) -> RouteState {
    if value.is_null() || value.is_undefined() {
        return RouteState::default();
    }
    js_sys::JSON::stringify(&value)
        .ok()
        .and_then(|raw| raw.as_string())
        .map(|raw| RouteState::from_json(&raw))
        .unwrap_or_default()
}

#[cfg(feature = "hydrate")]
pub(crate) fn state_to_js(state: &RouteState) -> wasm_bindgen::JsValue {
    js_sys::JSON::parse(&state.to_json())
        .unwrap_or(wasm_bindgen::JsValue::NULL)
}

#[derive(Debug, Default)]
struct MemoryHistory {
    entries: Vec<Location>,
    redirects: Vec<String>,
}

/// In-process history for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryNavigator {
    history: Mutex<MemoryHistory>,
}

impl MemoryNavigator {
    pub fn new(initial: Location) -> Self {
        Self {
            history: Mutex::new(MemoryHistory {
                entries: vec![initial],
                redirects: Vec::new(),
            }),
        }
    }

    pub fn at(href: &str) -> Self {
        Self::new(Location::from_href(href))
    }

    /// Number of history entries. Replacing never changes it.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Every href passed to [`Navigator::redirect`], oldest first.
    pub fn redirects(&self) -> Vec<String> {
        self.lock().redirects.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryHistory> {
        self.history
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Navigator for MemoryNavigator {
    fn location(&self) -> Location {
        self.lock().entries.last().cloned().unwrap_or_default()
    }

    fn replace(&self, target: &Location) {
        let mut history = self.lock();
        match history.entries.last_mut() {
            Some(current) => *current = target.clone(),
            None => history.entries.push(target.clone()),
        }
    }

    fn redirect(&self, href: &str) {
        self.lock().redirects.push(href.to_owned());
    }
}

impl<N: Navigator + ?Sized> Navigator for std::sync::Arc<N> {
    fn location(&self) -> Location {
        (**self).location()
    }

    fn replace(&self, target: &Location) {
        (**self).replace(target);
    }

    fn redirect(&self, href: &str) {
        (**self).redirect(href);
    }
}
