//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<AuthState>` is provided at the application root and shared by
//! every route gate and identity-aware component. Only the root provider
//! starts session probes; screens change the store through the named
//! mutators below.
//!
//! STALE RESPONSES
//! ===============
//! `probe_seq` increments whenever a probe is started, cancelled, or
//! superseded by sign-in/sign-out. A probe answer carries the sequence it was
//! issued under and is dropped unless that sequence is still current.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Identity;

/// Whether the current credential has been checked, and with what result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionValidity {
    #[default]
    Unknown,
    Valid,
    Invalid,
}

/// Handle for one in-flight session probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbeTicket {
    seq: u64,
}

/// Authentication state tracking the current identity and session validity.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    identity: Option<Identity>,
    validity: SessionValidity,
    probe_seq: u64,
    probe_in_flight: bool,
}

impl AuthState {
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn validity(&self) -> SessionValidity {
        self.validity
    }

    pub fn is_authenticated(&self) -> bool {
        self.validity == SessionValidity::Valid && self.identity.is_some()
    }

    pub fn probe_in_flight(&self) -> bool {
        self.probe_in_flight
    }

    /// Claim the right to probe the session.
    ///
    /// Returns `None` once validity is settled or while another probe is
    /// already outstanding, so any number of gates share a single call.
    pub fn begin_probe(&mut self) -> Option<ProbeTicket> {
        if self.validity != SessionValidity::Unknown || self.probe_in_flight {
            return None;
        }
        self.probe_seq = self.probe_seq.saturating_add(1);
        self.probe_in_flight = true;
        Some(ProbeTicket { seq: self.probe_seq })
    }

    /// Apply a probe answer. `None` means the probe failed or returned a
    /// falsy payload. Returns `false` when the ticket is stale.
    pub fn resolve_probe(&mut self, ticket: ProbeTicket, identity: Option<Identity>) -> bool {
        if !self.probe_in_flight || ticket.seq != self.probe_seq {
            log::debug!("discarding stale session probe {} (current {})", ticket.seq, self.probe_seq);
            return false;
        }
        self.probe_in_flight = false;
        match identity {
            Some(identity) => {
                self.identity = Some(identity);
                self.validity = SessionValidity::Valid;
            }
            None => {
                self.identity = None;
                self.validity = SessionValidity::Invalid;
            }
        }
        true
    }

    /// Drop the outstanding probe; its answer will be discarded.
    pub fn cancel_probe(&mut self) {
        if self.probe_in_flight {
            self.probe_in_flight = false;
            self.probe_seq = self.probe_seq.saturating_add(1);
        }
    }

    /// Record a successful login or registration response.
    pub fn sign_in(&mut self, identity: Identity) {
        self.cancel_probe();
        self.identity = Some(identity);
        self.validity = SessionValidity::Valid;
    }

    /// Forget the identity after logout.
    pub fn sign_out(&mut self) {
        self.invalidate();
    }

    /// Mark the session invalid, e.g. after the backend rejected the cookie.
    pub fn invalidate(&mut self) {
        self.cancel_probe();
        self.identity = None;
        self.validity = SessionValidity::Invalid;
    }
}
