//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the persisted signin response; `auth` is the reactive
//! mirror of it that route guards read.

pub mod auth;
pub mod session;
