//! Landing page for the `"Admin"` role.

use leptos::prelude::*;

/// Admin landing page.
#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <h1>"Administración"</h1>
            <p>"Sesión de administrador."</p>
        </div>
    }
}
