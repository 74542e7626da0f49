//! Query-string and navigation-state mutators.
//!
//! DESIGN
//! ======
//! Every mutator rewrites the current history entry in place. Navigation state
//! is always carried over from the current entry and only ever merged, so a
//! query update never drops state a previous view attached.

#[cfg(test)]
#[path = "query_params_test.rs"]
mod query_params_test;

use crate::util::navigation::{Location, Navigator};
use crate::util::query::QueryMap;
use crate::util::route_state::RouteState;

/// How a query update treats the current parameters and state.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateOptions {
    /// Keep the other current parameters (`true`) or start from an empty map.
    pub preserve_existing: bool,
    /// Extra navigation state merged over the current state.
    pub state: Option<RouteState>,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            preserve_existing: true,
            state: None,
        }
    }
}

impl UpdateOptions {
    /// Drop every current parameter not named in the update.
    pub fn replace_all() -> Self {
        Self {
            preserve_existing: false,
            state: None,
        }
    }

    #[must_use]
    pub fn with_state(mut self, state: RouteState) -> Self {
        self.state = Some(state);
        self
    }
}

/// Query mutators over any [`Navigator`].
#[derive(Clone, Debug)]
pub struct QueryParams<N> {
    navigator: N,
}

impl<N: Navigator> QueryParams<N> {
    pub fn new(navigator: N) -> Self {
        Self { navigator }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn location(&self) -> Location {
        self.navigator.location()
    }

    pub fn query(&self) -> QueryMap {
        QueryMap::parse(&self.navigator.location().search)
    }

    pub fn route_state(&self) -> RouteState {
        self.navigator.location().state
    }

    /// Set `key` to `value`, or delete it when `value` is `None` or empty.
    pub fn update_query_param(&self, key: &str, value: Option<&str>, options: UpdateOptions) {
        let current = self.navigator.location();
        let mut query = base_query(&current, options.preserve_existing);
        query.set(key, value);
        self.write(&current, &query, options.state.as_ref());
    }

    /// Apply a batch of keys. `None`/empty values delete their key.
    pub fn update_query_params<I, K, V>(&self, params: I, options: UpdateOptions)
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let current = self.navigator.location();
        let mut query = base_query(&current, options.preserve_existing);
        for (key, value) in params {
            let value = value.as_ref().map(|v| AsRef::<str>::as_ref(v));
            query.set(key.as_ref(), value);
        }
        self.write(&current, &query, options.state.as_ref());
    }

    /// Merge `new_state` into the current entry; path and query stay as they are.
    pub fn update_route_state(&self, new_state: RouteState) {
        let current = self.navigator.location();
        let state = current.state.clone().merged(&new_state);
        self.navigator.replace(&Location { state, ..current });
    }

    fn write(&self, current: &Location, query: &QueryMap, extra: Option<&RouteState>) {
        let mut state = current.state.clone();
        if let Some(extra) = extra {
            state.merge(extra);
        }
        let target = Location {
            pathname: current.pathname.clone(),
            search: query.to_search(),
            state,
        };
        self.navigator.replace(&target);
    }
}

fn base_query(current: &Location, preserve_existing: bool) -> QueryMap {
    if preserve_existing {
        QueryMap::parse(&current.search)
    } else {
        QueryMap::new()
    }
}
