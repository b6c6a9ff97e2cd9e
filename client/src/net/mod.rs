//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls the page makes back to its own server.

pub mod api;
