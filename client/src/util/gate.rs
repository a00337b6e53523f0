//! Route-authorization decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route component applies the same policy through `RouteGate`; this
//! module holds the pure part so the policy is testable without a reactive
//! runtime.
//!
//! POLICY
//! ======
//! Auth-only pages (`/login`, `/register`) send an already-authenticated user
//! to `/dashboard`. Every other path is protected. Nothing protected renders
//! while the session is still unknown.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::state::auth::SessionValidity;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Who may view a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Requires a valid session.
    Protected,
    /// Only for visitors without a session (login/register forms).
    AuthOnly,
}

/// What a gate renders for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    RedirectToLogin,
    RedirectToDashboard,
    /// Neutral placeholder while the session probe is outstanding.
    Pending,
}

impl GateDecision {
    /// Redirect target, if this decision navigates away.
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::RedirectToDashboard => Some(DASHBOARD_PATH),
            Self::Render | Self::Pending => None,
        }
    }
}

/// Classify a requested path. Unknown paths are protected.
pub fn classify(path: &str) -> RouteAccess {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    match trimmed {
        LOGIN_PATH | REGISTER_PATH => RouteAccess::AuthOnly,
        _ => RouteAccess::Protected,
    }
}

pub fn decide(access: RouteAccess, validity: SessionValidity) -> GateDecision {
    match (validity, access) {
        (SessionValidity::Unknown, _) => GateDecision::Pending,
        (SessionValidity::Valid, RouteAccess::Protected) | (SessionValidity::Invalid, RouteAccess::AuthOnly) => {
            GateDecision::Render
        }
        (SessionValidity::Valid, RouteAccess::AuthOnly) => GateDecision::RedirectToDashboard,
        (SessionValidity::Invalid, RouteAccess::Protected) => GateDecision::RedirectToLogin,
    }
}

/// Convenience for callers holding a raw path.
pub fn decide_for_path(path: &str, validity: SessionValidity) -> GateDecision {
    decide(classify(path), validity)
}
