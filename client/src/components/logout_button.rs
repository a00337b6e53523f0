//! Button that ends the session and returns to the login screen.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::wallet::WalletState;

#[component]
pub fn LogoutButton() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let wallet = expect_context::<RwSignal<WalletState>>();
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_click = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::util::session::log_out(auth, wallet).await;
                navigate(crate::util::gate::LOGIN_PATH, leptos_router::NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (auth, wallet);
    };

    view! {
        <button class="btn navbar__logout" on:click=on_click disabled=move || busy.get()>
            "Logout"
        </button>
    }
}
