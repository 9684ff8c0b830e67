//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `wizard`, `courses`) so the guard and
//! the account form can depend on small focused models, each testable without
//! a browser.

pub mod courses;
pub mod session;
pub mod wizard;
