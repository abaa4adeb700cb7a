//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    account::AccountPage, admin::AdminPage, dashboard::DashboardPage, user::UserPage,
};
use crate::state::auth::AuthState;
use crate::util::storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
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
/// Provides the shared authentication context and sets up client-side
/// routing. Any token found in durable storage is adopted before the
/// first render so the account page can redirect straight away.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let mut initial = AuthState::default();
    if let Some(token) = storage::read_token() {
        initial.restore(token);
    }
    let auth = RwSignal::new(initial);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/cuenta-client.css"/>
        <Title text="Cuenta"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AccountPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
                <Route path=StaticSegment("user") view=UserPage/>
            </Routes>
        </Router>
    }
}
