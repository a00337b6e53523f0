//! Networking modules for the wallet REST contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls through the host's `/api` forwarder and `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
