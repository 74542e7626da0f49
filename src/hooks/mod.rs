//! Leptos hooks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hooks are thin: they own signals and lifecycle wiring (effects, cleanup)
//! and delegate every rule to `net::fetch` and `net::query_params`.

pub mod use_fetch;
pub mod use_query_params;
