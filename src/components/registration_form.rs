//! Registration Form Component
//!
//! Six validated inputs. Nothing is sent anywhere: an accepted registration
//! is only written to the log.

use chrono::{Local, NaiveDate};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::store::{store_submit, RegistrationState, RegistrationStateStoreFields};
use crate::validation::Field;

use super::{FormField, GenderSelect};

/// Local calendar date, the upper bound for date of birth
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[component]
pub fn RegistrationForm() -> impl IntoView {
    let store = Store::new(RegistrationState::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match store_submit(&store, today()) {
            Some(registration) => log::info!(
                "User Registration Data: name={} email={} gender={} date_of_birth={}",
                registration.name,
                registration.email,
                registration.gender.as_str(),
                registration.date_of_birth,
            ),
            None => log::debug!(
                "registration rejected, {} invalid fields",
                store.errors().read_untracked().len()
            ),
        }
    };

    view! {
        <div class="form-backdrop">
            <form class="registration-form" novalidate=true on:submit=on_submit>
                <h2 class="form-title">"User Registration"</h2>
                <p class="form-subtitle">"Fill in the details below to create your account."</p>

                <FormField store field=Field::Name input_type="text" placeholder="Enter your name" />
                <FormField store field=Field::Email input_type="email" placeholder="Enter your email" />
                <FormField store field=Field::Password input_type="password" placeholder="Enter your password" />
                <FormField
                    store
                    field=Field::ConfirmPassword
                    input_type="password"
                    placeholder="Confirm your password"
                />
                <GenderSelect store />
                <FormField store field=Field::DateOfBirth input_type="date" />

                <button type="submit" class="submit-btn">"Register"</button>
            </form>
        </div>
    }
}
