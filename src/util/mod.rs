//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page logic so the
//! form and session rules can be tested without a browser.

pub mod auth;
pub mod storage;
pub mod validation;
