//! HTTP fetch and URL-state logic behind the hooks.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` defines the request/response wire shapes and the browser
//! transport, `fetch` owns the cancel-previous/start-next fetch cycle, and
//! `query_params` implements the history-replacing query mutators.

pub mod fetch;
pub mod query_params;
pub mod transport;
