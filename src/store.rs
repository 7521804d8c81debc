//! Registration Form Store
//!
//! Uses Leptos reactive_stores: inputs subscribe to the draft, error lines
//! to the error map.

use chrono::NaiveDate;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::validation::{validate_field, Field, FieldErrors, Registration, RegistrationDraft};

/// Form state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct RegistrationState {
    /// Current input values
    pub draft: RegistrationDraft,
    /// Messages shown under each input
    pub errors: FieldErrors,
    /// Set by the first submit; edits re-validate afterwards
    pub submitted: bool,
}

/// Type alias for the store
pub type RegistrationStore = Store<RegistrationState>;

// ========================
// Store Helper Functions
// ========================

/// Store an edited value, re-checking that field once a submit was attempted
pub fn store_set_field(store: &RegistrationStore, field: Field, value: String, today: NaiveDate) {
    store.draft().write().set(field, value);

    if store.submitted().get_untracked() {
        let message = validate_field(field, &store.draft().get_untracked(), today);
        store.errors().write().set(field, message);
    }
}

/// Validate the whole draft; returns the registration when every rule passes
pub fn store_submit(store: &RegistrationStore, today: NaiveDate) -> Option<Registration> {
    *store.submitted().write() = true;

    match store.draft().get_untracked().validate(today) {
        Ok(registration) => {
            *store.errors().write() = FieldErrors::default();
            Some(registration)
        }
        Err(errors) => {
            *store.errors().write() = errors;
            None
        }
    }
}
