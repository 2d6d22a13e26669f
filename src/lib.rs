//! # signin-portal
//!
//! Leptos + WASM frontend for a remote authentication API.
//!
//! This crate contains the login, registration, and welcome pages, the REST
//! client for the signin/signup endpoints, registration form validation, and
//! the `localStorage`-backed session store. Browser-only code is gated behind
//! the `csr` feature so the form and session logic can be tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
