//! Networking modules for the REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and error flattening; `types` defines the shared
//! wire schema. The server owns the contracts; these mirror them.

pub mod api;
pub mod types;
