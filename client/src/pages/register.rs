//! Registration page. Success signs the user in when the backend returns a
//! session, otherwise sends them to `/login`.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::forms::validate_register;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let full_name = RwSignal::new(String::new());
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
        let request =
            match validate_register(&full_name.get_untracked(), &email.get_untracked(), &password.get_untracked()) {
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
                match crate::net::api::register(&request).await {
                    Ok(Some(session)) => {
                        log::info!("registration succeeded, signed in");
                        crate::util::session::complete_login(auth, session);
                        navigate(crate::util::gate::DASHBOARD_PATH, leptos_router::NavigateOptions::default());
                    }
                    Ok(None) => {
                        log::info!("registration succeeded");
                        navigate(crate::util::gate::LOGIN_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("registration failed: {e}");
                        let _ = error.try_set(Some(e.user_message("Registration failed")));
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
                <h1>"Create Account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full Name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
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
                        placeholder="Password (min 6 characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || error.with(Option::is_some)>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
