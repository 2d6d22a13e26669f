//! Networking modules for the remote auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the signin/signup REST calls and `types` defines the JSON
//! request bodies they send.

pub mod api;
pub mod types;
