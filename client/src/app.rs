//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::route_gate::RouteGate;
use crate::net::api::ApiLayout;
use crate::pages::{
    coming_soon::ComingSoonPage, dashboard::DashboardPage, login::LoginPage, register::RegisterPage,
    wallet_action::WalletActionPage,
};
use crate::state::{auth::AuthState, wallet::WalletAction, wallet::WalletState};
use crate::util::gate::{DASHBOARD_PATH, LOGIN_PATH};
use crate::util::session::install_session_probe;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the auth and wallet stores, starts the one session probe every gate
/// shares, and declares the route table. Each screen sits behind a
/// `RouteGate`, which picks the policy from the path it is mounted on.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let wallet = RwSignal::new(WalletState::default());

    provide_context(auth);
    provide_context(wallet);
    provide_context(ApiLayout::default());

    install_session_probe(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/wallet-web.css"/>
        <Title text="Wallet"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=LOGIN_PATH/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=DASHBOARD_PATH/> }/>
                <Route path=StaticSegment("login") view=|| view! { <RouteGate><LoginPage/></RouteGate> }/>
                <Route path=StaticSegment("register") view=|| view! { <RouteGate><RegisterPage/></RouteGate> }/>
                <Route path=StaticSegment("dashboard") view=|| view! { <RouteGate><DashboardPage/></RouteGate> }/>
                <Route
                    path=(StaticSegment("wallet"), StaticSegment("fund"))
                    view=|| view! { <RouteGate><WalletActionPage action=WalletAction::Fund/></RouteGate> }
                />
                <Route
                    path=(StaticSegment("wallet"), StaticSegment("transfer"))
                    view=|| view! { <RouteGate><WalletActionPage action=WalletAction::Transfer/></RouteGate> }
                />
                <Route
                    path=(StaticSegment("wallet"), StaticSegment("withdraw"))
                    view=|| view! { <RouteGate><WalletActionPage action=WalletAction::Withdraw/></RouteGate> }
                />
                // Sidebar placeholders; kept after the static screens so those match first.
                <Route
                    path=ParamSegment("section")
                    view=|| view! { <RouteGate><ComingSoonPage/></RouteGate> }
                />
            </Routes>
        </Router>
    }
}
