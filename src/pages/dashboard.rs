//! Generic authenticated landing page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Dashboard page — the landing for a restored session.
/// Bounces back to the account page when no token is present.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if !auth.get().is_authenticated() {
            navigate("/", NavigateOptions::default());
        }
    });

    view! {
        <div class="landing-page">
            <h1>"Panel"</h1>
            <p>"Sesión iniciada."</p>
        </div>
    }
}
