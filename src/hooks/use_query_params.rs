//! `use_query_params`: query string and history state of the current route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filter bars, pagers and tabs keep their selection in the URL so it survives
//! reloads and can be shared. Writes go through the router's `navigate` with
//! `replace: true`, so router memos update and the back button is not flooded
//! with one entry per keystroke.
//!
//! Must be called inside a `leptos_router` `<Router>`.

#[cfg(test)]
#[path = "use_query_params_test.rs"]
mod use_query_params_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::query_params::{QueryParams, UpdateOptions};
use crate::util::navigation::{BrowserNavigator, Location, Navigator};
use crate::util::query::QueryMap;
use crate::util::route_state::RouteState;
#[cfg(feature = "hydrate")]
use crate::util::navigation::state_to_js;
#[cfg(feature = "hydrate")]
use leptos_router::location::State;

/// [`Navigator`] over the `leptos_router` location and `navigate` function.
#[derive(Clone)]
pub struct RouterNavigator {
    location: leptos_router::location::Location,
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    /// Capture the current router context.
    pub fn from_router() -> Self {
        Self {
            location: use_location(),
            navigate: Rc::new(use_navigate()),
        }
    }
}

impl Navigator for RouterNavigator {
    fn location(&self) -> Location {
        Location {
            pathname: self.location.pathname.get_untracked(),
            search: normalize_search(self.location.search.get_untracked()),
            state: read_route_state(&self.location, false),
        }
    }

    fn replace(&self, target: &Location) {
        let options = NavigateOptions {
            replace: true,
            ..NavigateOptions::default()
        };
        #[cfg(feature = "hydrate")]
        let options = NavigateOptions {
            state: State::new(Some(state_to_js(&target.state))),
            ..options
        };
        (self.navigate)(&target.href(), options);
    }

    fn redirect(&self, href: &str) {
        BrowserNavigator.redirect(href);
    }
}

/// Router search strings may or may not carry the leading `?`.
fn normalize_search(search: String) -> String {
    if search.is_empty() || search.starts_with('?') {
        search
    } else {
        format!("?{search}")
    }
}

fn read_route_state(location: &leptos_router::location::Location, tracked: bool) -> RouteState {
    #[cfg(feature = "hydrate")]
    {
        let state = if tracked {
            location.state.get()
        } else {
            location.state.get_untracked()
        };
        crate::util::navigation::state_from_js(state.to_js_value())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (location, tracked);
        RouteState::default()
    }
}

/// Handle returned by [`use_query_params`].
#[derive(Clone, Copy)]
pub struct UseQueryParams {
    /// Parsed query of the current route.
    pub query: Memo<QueryMap>,
    /// History state of the current entry.
    pub route_state: Memo<RouteState>,
    pub pathname: Memo<String>,
    params: StoredValue<QueryParams<RouterNavigator>, LocalStorage>,
}

impl UseQueryParams {
    /// Set `key`, or delete it when `value` is `None` or empty.
    pub fn update_query_param(&self, key: &str, value: Option<&str>, options: UpdateOptions) {
        self.params
            .try_with_value(|p| p.update_query_param(key, value, options));
    }

    /// Apply a batch of keys with the merge policy in `options`.
    pub fn update_query_params<I, K, V>(&self, params: I, options: UpdateOptions)
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.params
            .try_with_value(|p| p.update_query_params(params, options));
    }

    /// Merge `new_state` into the history state; the URL is untouched.
    pub fn update_route_state(&self, new_state: RouteState) {
        self.params
            .try_with_value(|p| p.update_route_state(new_state));
    }

    /// Untracked snapshot of the current entry.
    pub fn location(&self) -> Location {
        self.params
            .try_with_value(|p| p.location())
            .unwrap_or_default()
    }
}

pub fn use_query_params() -> UseQueryParams {
    let navigator = RouterNavigator::from_router();
    let location = navigator.location.clone();

    let search = location.search;
    let query = Memo::new(move |_| QueryMap::parse(&search.get()));
    let state_location = location.clone();
    let route_state = Memo::new(move |_| read_route_state(&state_location, true));

    UseQueryParams {
        query,
        route_state,
        pathname: location.pathname,
        params: StoredValue::new_local(QueryParams::new(navigator)),
    }
}
