//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read/write shared state from Leptos context providers; the
//! route guards and the account wizard modal live here.

pub mod route_guard;
pub mod shell;
pub mod user_form_modal;
