//! Form Field Components
//!
//! Labelled inputs bound to the registration store, each with its error
//! line underneath.

use leptos::prelude::*;

use crate::store::{store_set_field, RegistrationStateStoreFields, RegistrationStore};
use crate::validation::{Field, Gender};

use super::registration_form::today;

/// Error text for one field; empty while the field is valid
#[component]
fn FieldError(store: RegistrationStore, field: Field) -> impl IntoView {
    view! {
        <p class="field-error">
            {move || store.errors().read().get(field).unwrap_or_default()}
        </p>
    }
}

/// Text-like `<input>` (text, email, password, date)
#[component]
pub fn FormField(
    store: RegistrationStore,
    field: Field,
    input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-label">{field.label()}</label>
            <input
                type=input_type
                class="form-input"
                placeholder=placeholder
                prop:value=move || store.draft().read().value(field).to_string()
                on:input=move |ev| store_set_field(&store, field, event_target_value(&ev), today())
            />
            <FieldError store field />
        </div>
    }
}

/// Gender `<select>` with an empty "no choice" option
#[component]
pub fn GenderSelect(store: RegistrationStore) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-label">{Field::Gender.label()}</label>
            <select
                class="form-input"
                prop:value=move || store.draft().read().gender.clone()
                on:change=move |ev| {
                    store_set_field(&store, Field::Gender, event_target_value(&ev), today())
                }
            >
                <option value="">"Select your gender"</option>
                {Gender::ALL
                    .into_iter()
                    .map(|gender| view! { <option value=gender.as_str()>{gender.label()}</option> })
                    .collect_view()}
            </select>
            <FieldError store field=Field::Gender />
        </div>
    }
}
