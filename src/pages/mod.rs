//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates form chrome to
//! `components`. Submit flows take the transport as a closure so they can be
//! driven without a browser.

pub mod login;
pub mod register;
pub mod welcome;
