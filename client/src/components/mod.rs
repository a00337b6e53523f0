//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the gate placeholder, navigation, wallet forms and
//! history table while reading and writing the shared stores from Leptos
//! context providers.

pub mod loading_spinner;
pub mod logout_button;
pub mod navbar;
pub mod route_gate;
pub mod transaction_table;
pub mod wallet_modal;
