//! Neutral placeholder shown while the session check is outstanding.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-spinner" role="status" aria-busy="true">
            <span class="loading-spinner__dot"></span>
            <span class="loading-spinner__label">"Loading..."</span>
        </div>
    }
}
