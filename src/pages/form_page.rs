//! Registration Form Page

use leptos::prelude::*;

use crate::components::{NavButton, NavDirection, PageHeader, RegistrationForm};
use crate::router::Route;

#[component]
pub fn FormPage() -> impl IntoView {
    view! {
        <div class="form-page">
            <PageHeader>
                <NavButton to=Route::Pokemon label="To Pokémons" direction=NavDirection::Back />
            </PageHeader>
            <RegistrationForm />
        </div>
    }
}
