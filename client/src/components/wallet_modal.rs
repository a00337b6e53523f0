//! Fund / transfer / withdraw forms, standalone or as a dashboard modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful submission updates the shared `WalletState` optimistically,
//! closes the modal, and navigates to `/dashboard`, whose own load then
//! replaces the optimistic entry with what the backend reports.

use leptos::prelude::*;

use crate::state::wallet::{WalletAction, WalletState};
use crate::util::forms::{PAYMENT_METHODS, WalletFormInput, validate_wallet_form};

/// Form body for one wallet action.
#[component]
pub fn WalletForm(action: WalletAction) -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();
    let input = RwSignal::new(WalletFormInput::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let submission = match input.with_untracked(|i| validate_wallet_form(action, i)) {
            Ok(submission) => submission,
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
                match submit(&submission).await {
                    Ok(()) => {
                        log::info!("{} submitted", action.kind());
                        let _ = wallet.try_update(|w| {
                            w.complete_submission(action, submission.amount(), now_timestamp());
                        });
                        navigate(crate::util::gate::DASHBOARD_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("{} failed: {e}", action.kind());
                        let _ = error.try_set(Some(e.user_message(action.failure_message())));
                        let _ = busy.try_set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (submission, wallet);
    };

    let method_label = if action == WalletAction::Withdraw { "Withdrawal Method" } else { "Payment Method" };

    let amount_field = view! {
        <label class="form__field">
            <span>"Amount"</span>
            <input
                class="form__input"
                type="number"
                min="0"
                step="0.01"
                placeholder="0.00"
                prop:value=move || input.with(|i| i.amount.clone())
                on:input=move |ev| input.update(|i| i.amount = event_target_value(&ev))
            />
        </label>
    };

    let detail_fields = match action {
        WalletAction::Transfer => view! {
            <label class="form__field">
                <span>"Recipient Email"</span>
                <input
                    class="form__input"
                    type="email"
                    placeholder="recipient@example.com"
                    prop:value=move || input.with(|i| i.recipient_email.clone())
                    on:input=move |ev| input.update(|i| i.recipient_email = event_target_value(&ev))
                />
            </label>
            <label class="form__field">
                <span>"Description (optional)"</span>
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || input.with(|i| i.description.clone())
                    on:input=move |ev| input.update(|i| i.description = event_target_value(&ev))
                />
            </label>
        }
        .into_any(),
        WalletAction::Fund | WalletAction::Withdraw => view! {
            <label class="form__field">
                <span>{method_label}</span>
                <select
                    class="form__input"
                    prop:value=move || input.with(|i| i.payment_method.clone())
                    on:change=move |ev| input.update(|i| i.payment_method = event_target_value(&ev))
                >
                    <option value="">"Select a method"</option>
                    {PAYMENT_METHODS
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
            </label>
        }
        .into_any(),
    };

    view! {
        <form class="form wallet-form" on:submit=on_submit>
            <h2>{action.title()}</h2>
            {amount_field}
            {detail_fields}
            <Show when=move || error.with(Option::is_some)>
                <p class="form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Processing..." } else { action.title() }}
            </button>
        </form>
    }
}

/// Dashboard overlay around `WalletForm`. Clicking the backdrop or pressing
/// Escape closes it without submitting.
#[component]
pub fn WalletModal(action: WalletAction) -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();
    let close = move || wallet.update(|w| w.active_modal = None);

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div
                class="dialog dialog--wallet"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        close();
                    }
                }
            >
                <WalletForm action=action/>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| close()>"Cancel"</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
async fn submit(submission: &crate::util::forms::WalletSubmission) -> Result<(), crate::net::api::ApiError> {
    use crate::util::forms::WalletSubmission;

    match submission {
        WalletSubmission::Fund(request) => crate::net::api::fund(request).await,
        WalletSubmission::Transfer(request) => crate::net::api::transfer(request).await,
        WalletSubmission::Withdraw(request) => crate::net::api::withdraw(request).await,
    }
}

#[cfg(feature = "hydrate")]
fn now_timestamp() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}
