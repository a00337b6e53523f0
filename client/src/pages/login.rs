//! Login page: email + password against `/auth/login`.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::forms::validate_login;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&request).await {
                    Ok(response) => {
                        log::info!("login succeeded");
                        crate::util::session::complete_login(auth, response);
                        navigate(crate::util::gate::DASHBOARD_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        let _ = error.try_set(Some(e.user_message("Login failed")));
                        let _ = busy.try_set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, auth);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Wallet"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || error.with(Option::is_some)>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
