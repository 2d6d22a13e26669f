//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components render form chrome only; submission and navigation stay in
//! `pages`.

pub mod auth_card;
pub mod form_field;
