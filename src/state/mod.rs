//! Client-side state owned by the hooks.
//!
//! DESIGN
//! ======
//! State is a plain struct behind a sink trait so the fetch state machine can
//! drive either a Leptos signal or a test recorder.

pub mod request;
