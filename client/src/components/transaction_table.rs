//! Paginated transaction history for the dashboard.

use leptos::prelude::*;

use crate::state::wallet::WalletState;
use crate::util::pagination::{display_date, paginate, short_reference, status_label};

#[component]
pub fn TransactionTable() -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();
    let page = Memo::new(move |_| wallet.with(|w| paginate(&w.transactions, w.page)));
    let show_details_notice = RwSignal::new(false);

    let go_prev = move |_| {
        let current = page.get_untracked().page;
        wallet.update(|w| w.page = current.saturating_sub(1).max(1));
    };
    let go_next = move |_| {
        let current = page.get_untracked();
        if current.has_next() {
            wallet.update(|w| w.page = current.page + 1);
        }
    };

    view! {
        <section class="transactions">
            <h2>"Transaction History"</h2>
            <Show
                when=move || page.with(|p| !p.items.is_empty())
                fallback=|| view! { <p class="transactions__empty">"No transactions yet."</p> }
            >
                <table class="transactions__table">
                    <thead>
                        <tr>
                            <th>"Reference"</th>
                            <th>"Type"</th>
                            <th>"Amount"</th>
                            <th>"Status"</th>
                            <th>"Date"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            page.get()
                                .items
                                .into_iter()
                                .map(|tx| {
                                    let status = status_label(tx.status.as_deref());
                                    let status_class = format!("status status--{}", status.to_lowercase());
                                    view! {
                                        <tr>
                                            <td class="mono">{short_reference(&tx.id)}</td>
                                            <td>{tx.kind.clone()}</td>
                                            <td>{format!("{:.2}", tx.amount)}</td>
                                            <td><span class=status_class>{status}</span></td>
                                            <td>{display_date(&tx.timestamp)}</td>
                                            <td>
                                                <button class="btn" on:click=move |_| show_details_notice.set(true)>
                                                    "View"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <div class="transactions__pager">
                    <button class="btn" on:click=go_prev disabled=move || !page.with(|p| p.has_prev())>
                        "Previous"
                    </button>
                    <span>{move || page.with(|p| format!("Page {} of {}", p.page, p.total_pages.max(1)))}</span>
                    <button class="btn" on:click=go_next disabled=move || !page.with(|p| p.has_next())>
                        "Next"
                    </button>
                </div>
            </Show>
            <Show when=move || show_details_notice.get()>
                <div class="dialog-backdrop" on:click=move |_| show_details_notice.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <p>"Feature to view transactions is coming soon!"</p>
                        <div class="dialog__actions">
                            <button class="btn btn--primary" on:click=move |_| show_details_notice.set(false)>
                                "Close"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </section>
    }
}
