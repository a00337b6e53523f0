//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure policy from
//! page and component logic to improve reuse and testability.

pub mod forms;
pub mod gate;
pub mod pagination;
pub mod session;
pub mod storage;
