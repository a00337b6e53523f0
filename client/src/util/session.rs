//! Session lifecycle glue between the auth store and the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `install_session_probe` runs once in the root `App`, so every route gate
//! reads one shared answer instead of probing on its own. Cleanup cancels the
//! outstanding probe; an answer that lands after unmount is discarded.

use leptos::prelude::*;

use crate::net::api::TOKEN_STORAGE_KEY;
use crate::net::types::LoginResponse;
use crate::state::auth::AuthState;
use crate::state::wallet::WalletState;
use crate::util::storage;

/// Start the session probe for this mount of the auth provider.
pub fn install_session_probe(auth: RwSignal<AuthState>) {
    let Some(ticket) = auth.try_update(|a| a.begin_probe()).flatten() else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let identity = crate::net::api::fetch_session().await;
        let applied = auth.try_update(|a| a.resolve_probe(ticket, identity)).unwrap_or(false);
        log::debug!("session probe resolved (applied: {applied})");
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = ticket;

    on_cleanup(move || {
        let _ = auth.try_update(|a| a.cancel_probe());
    });
}

/// Record a successful login: keep the optional token and sign in.
pub fn complete_login(auth: RwSignal<AuthState>, response: LoginResponse) {
    match response.token.as_deref() {
        Some(token) if !token.is_empty() => storage::save_string(TOKEN_STORAGE_KEY, token),
        _ => storage::remove(TOKEN_STORAGE_KEY),
    }
    auth.update(|a| a.sign_in(response.user));
}

/// Tell the backend, then forget everything about the session locally.
pub async fn log_out(auth: RwSignal<AuthState>, wallet: RwSignal<WalletState>) {
    crate::net::api::logout().await;
    storage::remove(TOKEN_STORAGE_KEY);
    let _ = auth.try_update(|a| a.sign_out());
    let _ = wallet.try_update(|w| w.clear());
}
