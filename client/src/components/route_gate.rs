//! Route gate: renders, redirects, or waits based on session validity.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate never probes the backend itself. It reads the shared
//! `AuthState` that the root `App` probes once per mount, classifies the
//! current location, and re-decides whenever either changes. The decision is
//! memoized, so the wrapped screen is rebuilt only when the outcome flips,
//! not on every auth write or path tweak.

#[cfg(test)]
#[path = "route_gate_test.rs"]
mod route_gate_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::components::loading_spinner::LoadingSpinner;
use crate::state::auth::AuthState;
use crate::util::gate::{GateDecision, LOGIN_PATH, classify, decide};

/// Gate decision for `pathname`, recomputed only when its inputs change and
/// propagated only when the outcome itself changes.
pub fn gate_decision(pathname: Signal<String>, auth: RwSignal<AuthState>) -> Memo<GateDecision> {
    Memo::new(move |_| {
        let access = pathname.with(|path| classify(path));
        decide(access, auth.with(AuthState::validity))
    })
}

/// Wrap a screen so it only renders when the session policy allows it.
#[component]
pub fn RouteGate(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let decision = gate_decision(location.pathname.into(), auth);

    move || match decision.get() {
        GateDecision::Render => children().into_any(),
        GateDecision::Pending => view! { <LoadingSpinner/> }.into_any(),
        redirect => {
            let target = redirect.redirect_target().unwrap_or(LOGIN_PATH);
            log::debug!("route gate redirecting to {target}");
            view! { <Redirect path=target/> }.into_any()
        }
    }
}
