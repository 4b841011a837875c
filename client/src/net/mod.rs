//! Networking modules for the same-origin HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the login and summary calls; `types` defines the wire
//! schema shared with the upstream goals API.

pub mod api;
pub mod types;
