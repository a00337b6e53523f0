//! Placeholder for sidebar sections that are not built yet.

#[cfg(test)]
#[path = "coming_soon_test.rs"]
mod coming_soon_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_params_map;

use crate::components::navbar::Navbar;
use crate::util::gate::LOGIN_PATH;

/// Top-level sections that render the placeholder, as `(segment, title)`.
pub const COMING_SOON_SECTIONS: [(&str, &str); 9] = [
    ("overview", "Overview"),
    ("customers", "Customers"),
    ("spot-orders", "Spot Orders"),
    ("margin-orders", "Margin Orders"),
    ("transactions", "Transactions"),
    ("notification", "Notifications"),
    ("settings", "Settings"),
    ("logout", "Logout"),
    ("help", "Help"),
];

/// Title for a placeholder section; `None` for paths that are not sections.
pub fn coming_soon_title(segment: &str) -> Option<&'static str> {
    COMING_SOON_SECTIONS
        .iter()
        .find(|(known, _)| *known == segment)
        .map(|(_, title)| *title)
}

/// `/{section}`. Anything that is not a known section goes the way of an
/// unknown path.
#[component]
pub fn ComingSoonPage() -> impl IntoView {
    let params = use_params_map();
    let title = move || params.with(|p| p.get("section").as_deref().and_then(coming_soon_title));

    move || match title() {
        Some(title) => view! {
            <div class="app-layout">
                <Navbar/>
                <main class="coming-soon">
                    <h1>{title}</h1>
                    <p>"Coming soon."</p>
                    <p>"This feature is currently in development."</p>
                    <a class="btn" href="/dashboard">"Back to dashboard"</a>
                </main>
            </div>
        }
        .into_any(),
        None => view! { <Redirect path=LOGIN_PATH/> }.into_any(),
    }
}
