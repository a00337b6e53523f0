//! Top navigation: section links, signed-in user, and logout.

use leptos::prelude::*;

use crate::components::logout_button::LogoutButton;
use crate::state::auth::AuthState;

/// Sidebar sections. Only the dashboard is live; the rest are placeholders.
const NAV_LINKS: [(&str, &str); 6] = [
    ("/dashboard", "Dashboard"),
    ("/overview", "Overview"),
    ("/transactions", "Transactions"),
    ("/notification", "Notifications"),
    ("/settings", "Settings"),
    ("/help", "Help"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let user_label = move || auth.with(|a| a.identity().map(|i| i.label().to_owned()).unwrap_or_default());

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/dashboard">"Wallet"</a>
            <ul class="navbar__links">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| view! { <li><a href=*href>{*label}</a></li> })
                    .collect_view()}
            </ul>
            <span class="navbar__user">{user_label}</span>
            <LogoutButton/>
        </nav>
    }
}
