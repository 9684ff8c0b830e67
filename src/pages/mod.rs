//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Guarding happens in the route table, not in the pages.

pub mod dashboard;
pub mod landing;
pub mod login;
pub mod member;
pub mod users;
