//! Standalone `/wallet/{fund,transfer,withdraw}` screens.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::wallet_modal::WalletForm;
use crate::state::wallet::WalletAction;

#[component]
pub fn WalletActionPage(action: WalletAction) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Navbar/>
            <main class="wallet-action">
                <WalletForm action=action/>
                <a class="btn" href="/dashboard">"Cancel"</a>
            </main>
        </div>
    }
}
