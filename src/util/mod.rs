//! Utility helpers shared by the hooks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, history,
//! URL encoding) from hook logic to improve reuse and testability.

pub mod navigation;
pub mod query;
pub mod route_state;
pub mod storage;
