//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Access control lives in `RouteGate`, not in the pages.

pub mod coming_soon;
pub mod dashboard;
pub mod login;
pub mod register;
pub mod wallet_action;
