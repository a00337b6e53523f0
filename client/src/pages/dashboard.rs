//! Dashboard page: balance, transaction history, and wallet actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. On mount it fetches the balance
//! and the history concurrently and folds both results into the shared
//! `WalletState`. Access control is handled by the surrounding `RouteGate`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::transaction_table::TransactionTable;
use crate::components::wallet_modal::WalletModal;
use crate::net::api::ApiError;
use crate::net::types::Transaction;
use crate::state::auth::AuthState;
use crate::state::wallet::{WalletAction, WalletState};

pub const BALANCE_ERROR: &str = "Failed to fetch balance.";
pub const TRANSACTIONS_ERROR: &str = "Failed to fetch transactions.";

/// Replace fetch errors with the fixed banner messages, logging the cause.
pub fn summarize_load(
    balance: Result<f64, ApiError>,
    transactions: Result<Vec<Transaction>, ApiError>,
) -> (Result<f64, String>, Result<Vec<Transaction>, String>) {
    let balance = balance.map_err(|e| {
        log::warn!("balance fetch failed: {e}");
        BALANCE_ERROR.to_owned()
    });
    let transactions = transactions.map_err(|e| {
        log::warn!("transactions fetch failed: {e}");
        TRANSACTIONS_ERROR.to_owned()
    });
    (balance, transactions)
}

pub fn format_balance(balance: f64) -> String {
    format!("{balance:.2}")
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let wallet = expect_context::<RwSignal<WalletState>>();

    wallet.update(|w| w.loading = true);

    #[cfg(feature = "hydrate")]
    {
        let layout = expect_context::<crate::net::api::ApiLayout>();
        let identity = auth.with_untracked(|a| a.identity().cloned());
        leptos::task::spawn_local(async move {
            let (balance, transactions) = futures::join!(
                crate::net::api::fetch_balance(layout, identity.clone()),
                crate::net::api::fetch_transactions(layout, identity),
            );
            let (balance, transactions) = summarize_load(balance, transactions);
            let _ = wallet.try_update(|w| w.finish_load(balance, transactions));
        });
    }

    let greeting = move || auth.with(|a| a.identity().map(|i| i.label().to_owned()).unwrap_or_default());
    let open = move |action: WalletAction| wallet.update(|w| w.active_modal = Some(action));

    view! {
        <div class="app-layout">
            <Navbar/>
            <main class="dashboard">
                <header class="dashboard__header">
                    <h1>"Welcome, " {greeting}</h1>
                </header>

                <section class="balance-card">
                    <span class="balance-card__label">"Current Balance"</span>
                    <span class="balance-card__value">{move || wallet.with(|w| format_balance(w.balance))}</span>
                    <Show when=move || wallet.with(|w| w.loading)>
                        <span class="balance-card__loading">"Refreshing..."</span>
                    </Show>
                </section>

                <Show when=move || wallet.with(|w| w.error.is_some())>
                    <p class="dashboard__error">{move || wallet.with(|w| w.error.clone().unwrap_or_default())}</p>
                </Show>

                <div class="dashboard__actions">
                    <button class="btn btn--primary" on:click=move |_| open(WalletAction::Fund)>
                        "Fund Wallet"
                    </button>
                    <button class="btn" on:click=move |_| open(WalletAction::Transfer)>
                        "Transfer"
                    </button>
                    <button class="btn" on:click=move |_| open(WalletAction::Withdraw)>
                        "Withdraw"
                    </button>
                </div>

                <TransactionTable/>

                {move || wallet.with(|w| w.active_modal).map(|action| view! { <WalletModal action=action/> })}
            </main>
        </div>
    }
}
