//! Landing page for the `"Cliente"` role.

use leptos::prelude::*;

/// Client landing page.
#[component]
pub fn UserPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <h1>"Mi Cuenta"</h1>
            <p>"Sesión de cliente."</p>
        </div>
    }
}
