//! Form input bound to one field of the shared account draft.

use leptos::prelude::*;

use crate::state::form::{AccountDraft, Field};

/// A controlled input writing into one [`Field`] of the draft signal.
///
/// Validation stays at the HTML level: the `input_type` and `required`
/// attributes are all the field-level checking the page does.
#[component]
pub fn DraftInput(
    draft: RwSignal<AccountDraft>,
    field: Field,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <input
            class="account-page__input"
            type=input_type
            placeholder=placeholder
            required=true
            prop:value=move || draft.get().get(field).to_owned()
            on:input=move |ev| {
                draft.update(|d| d.set(field, event_target_value(&ev)));
            }
        />
    }
}
