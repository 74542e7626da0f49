//! # client-hooks
//!
//! Leptos + WASM client utilities for data fetching and URL state.
//!
//! - [`hooks::use_fetch`] wraps one HTTP call with loading/error state,
//!   cancels the previous request when a new one starts, and logs the user
//!   out on a `401`.
//! - [`hooks::use_query_params`] reads the query string and history state of
//!   the current route and rewrites them in place (history replace, never
//!   push).
//!
//! Browser globals (local storage, location/history, the network) sit behind
//! the [`util::storage::CredentialStore`], [`util::navigation::Navigator`] and
//! [`net::transport::Transport`] traits. Browser implementations are compiled
//! with the `hydrate` feature; in-memory implementations keep the fetch and
//! query logic testable on the host.

pub mod config;
pub mod error;
pub mod hooks;
pub mod net;
pub mod state;
pub mod util;

pub use config::{HooksConfig, provide_hooks_config};
pub use error::{FetchError, TransportError};
pub use hooks::use_fetch::{FetchOptions, TokenSource, UseFetch, use_fetch};
pub use hooks::use_query_params::{UseQueryParams, use_query_params};
pub use net::query_params::UpdateOptions;
pub use state::request::RequestState;
pub use util::query::QueryMap;
pub use util::route_state::RouteState;
