//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `wallet`) so individual components can
//! depend on small focused models. Both are provided once at the root.

pub mod auth;
pub mod wallet;
