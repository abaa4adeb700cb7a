//! Account page with side-by-side registration and login forms.
//!
//! ROUTING
//! =======
//! Submit handlers never navigate. They only update the shared
//! [`AuthState`]; the single effect below follows `destination` once the
//! state settles. That keeps one source of truth for the post-login route
//! instead of separate role-based and flag-based redirects racing.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::draft_input::DraftInput;
use crate::net::api;
use crate::state::auth::{AuthState, role_route};
use crate::state::form::{AccountDraft, Field, SubmitPhase};
use crate::util::{notify, storage};

/// Account page — registration card on the left, login card on the right.
#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let draft = RwSignal::new(AccountDraft::default());
    let register_phase = RwSignal::new(SubmitPhase::Idle);
    let login_phase = RwSignal::new(SubmitPhase::Idle);
    let register_error = RwSignal::new(None::<String>);

    // The only redirect path: follow the destination the auth state
    // decided on, whether from a fresh login or a restored session.
    Effect::new(move || {
        if let Some(dest) = auth.get().destination {
            navigate(dest, NavigateOptions::default());
        }
    });

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if register_phase.get_untracked().in_flight() {
            return;
        }

        let d = draft.get_untracked();
        if !d.passwords_match() {
            register_error.set(Some("Las contraseñas no coinciden".to_owned()));
            return;
        }

        register_error.set(None);
        register_phase.set(SubmitPhase::Submitting);
        let body = d.to_register_request();

        leptos::task::spawn_local(async move {
            match api::register(&body).await {
                Ok(()) => {
                    register_phase.set(SubmitPhase::Done);
                    draft.update(AccountDraft::clear);
                    notify::alert("Usuario registrado con éxito");
                }
                Err(err) => {
                    log::error!("registration failed: {err}");
                    register_phase.set(SubmitPhase::Failed);
                    register_error.set(Some("No se pudo completar el registro".to_owned()));
                }
            }
        });
    };

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if login_phase.get_untracked().in_flight() {
            return;
        }

        login_phase.set(SubmitPhase::Submitting);
        let body = draft.get_untracked().to_login_request();

        leptos::task::spawn_local(async move {
            match api::login(&body).await {
                Ok(resp) => match resp.token {
                    Some(token) if !token.is_empty() => {
                        if role_route(&resp.user.rol).is_none() {
                            log::error!("unknown role: {:?}", resp.user.rol);
                        }
                        storage::write_token(&token);
                        login_phase.set(SubmitPhase::Done);
                        auth.update(|a| a.apply_login(token, resp.user));
                    }
                    _ => {
                        // Abort before persisting anything.
                        log::error!("login response did not include a token");
                        login_phase.set(SubmitPhase::Failed);
                        notify::alert("Error al autenticar, token no válido.");
                    }
                },
                Err(err) => {
                    // One generic message regardless of the actual cause.
                    log::error!("login failed: {err}");
                    login_phase.set(SubmitPhase::Failed);
                    notify::alert("Usuario o contraseña incorrectos");
                }
            }
        });
    };

    view! {
        <div class="account-page">
            <section class="account-page__card">
                <h2 class="account-page__title">"Nuevo Cliente"</h2>
                <Show when=move || register_error.get().is_some()>
                    <p class="account-page__error">
                        {move || register_error.get().unwrap_or_default()}
                    </p>
                </Show>
                <form class="account-page__form" on:submit=on_register>
                    <DraftInput
                        draft=draft
                        field=Field::FirstName
                        input_type="text"
                        placeholder="Ingresa tu nombre"
                    />
                    <DraftInput
                        draft=draft
                        field=Field::LastName
                        input_type="text"
                        placeholder="Ingresa tu apellido"
                    />
                    <DraftInput
                        draft=draft
                        field=Field::Phone
                        input_type="tel"
                        placeholder="Ingresa tu teléfono"
                    />
                    <DraftInput
                        draft=draft
                        field=Field::Email
                        input_type="email"
                        placeholder="Ingresa tu correo electrónico"
                    />
                    <DraftInput
                        draft=draft
                        field=Field::Password
                        input_type="password"
                        placeholder="Crea una contraseña"
                    />
                    <DraftInput
                        draft=draft
                        field=Field::ConfirmPassword
                        input_type="password"
                        placeholder="Confirma tu contraseña"
                    />
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || register_phase.get().in_flight()
                    >
                        "Registrar"
                    </button>
                </form>
            </section>

            <section class="account-page__card">
                <h2 class="account-page__title">"Ya Tengo Cuenta"</h2>
                <form class="account-page__form" on:submit=on_login>
                    <DraftInput
                        draft=draft
                        field=Field::Email
                        input_type="email"
                        placeholder="Ingresa tu correo electrónico"
                    />
                    <DraftInput
                        draft=draft
                        field=Field::Password
                        input_type="password"
                        placeholder="Ingresa tu contraseña"
                    />
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || login_phase.get().in_flight()
                    >
                        "Iniciar Sesión"
                    </button>
                </form>
            </section>
        </div>
    }
}
