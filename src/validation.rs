//! Registration Validation
//!
//! Declarative ruleset for the registration form. Each field owns an ordered
//! list of `(check, message)` rules; the first failing rule is the error shown
//! under that field.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use validator::ValidateEmail;

/// Format produced by `<input type="date">`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static PASSWORD_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9@$!%*?&]{8,}$").unwrap());
static PASSWORD_CLASSES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [r"[a-z]", r"[A-Z]", r"[0-9]", r"[@$!%*?&]"].map(|p| Regex::new(p).unwrap())
});

/// Registration form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Gender,
    DateOfBirth,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::Gender,
        Field::DateOfBirth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
            Field::Gender => "Gender",
            Field::DateOfBirth => "Date of Birth",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Form value
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == value)
    }
}

/// A single predicate a field value must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Required,
    MinChars(usize),
    MaxChars(usize),
    /// HTML5 `type="email"` address rule
    EmailShape,
    /// Lower, upper, digit and one of `@$!%*?&`; nothing else; 8+ long
    PasswordComplexity,
    /// Equal to the value of another field
    SameAs(Field),
    KnownGender,
    Date,
    NotInFuture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub check: Check,
    pub message: &'static str,
}

const fn rule(check: Check, message: &'static str) -> Rule {
    Rule { check, message }
}

const NAME_RULES: &[Rule] = &[
    rule(Check::Required, "Name is required"),
    rule(Check::MinChars(3), "Name must be at least 3 characters"),
    rule(Check::MaxChars(30), "Name cannot exceed 30 characters"),
];

const EMAIL_RULES: &[Rule] = &[
    rule(Check::Required, "Email is required"),
    rule(Check::EmailShape, "Email is invalid"),
];

const PASSWORD_RULES: &[Rule] = &[
    rule(Check::Required, "Password is required"),
    rule(Check::MinChars(8), "Password must be at least 8 characters"),
    rule(
        Check::PasswordComplexity,
        "Password must include uppercase, lowercase, number, and special character",
    ),
];

const CONFIRM_PASSWORD_RULES: &[Rule] = &[
    rule(Check::Required, "Confirm Password is required"),
    rule(Check::SameAs(Field::Password), "Passwords must match"),
];

const GENDER_RULES: &[Rule] = &[
    rule(Check::Required, "Gender is required"),
    rule(Check::KnownGender, "Gender is invalid"),
];

const DATE_OF_BIRTH_RULES: &[Rule] = &[
    rule(Check::Required, "Date of Birth is required"),
    rule(Check::Date, "Date of Birth is invalid"),
    rule(Check::NotInFuture, "Date of Birth cannot be in the future"),
];

/// Ordered rules for a field
pub fn rules_for(field: Field) -> &'static [Rule] {
    match field {
        Field::Name => NAME_RULES,
        Field::Email => EMAIL_RULES,
        Field::Password => PASSWORD_RULES,
        Field::ConfirmPassword => CONFIRM_PASSWORD_RULES,
        Field::Gender => GENDER_RULES,
        Field::DateOfBirth => DATE_OF_BIRTH_RULES,
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

fn passes(check: Check, value: &str, draft: &RegistrationDraft, today: NaiveDate) -> bool {
    match check {
        Check::Required => !value.is_empty(),
        Check::MinChars(min) => value.chars().count() >= min,
        Check::MaxChars(max) => value.chars().count() <= max,
        Check::EmailShape => value.validate_email(),
        Check::PasswordComplexity => {
            PASSWORD_CHARSET.is_match(value)
                && PASSWORD_CLASSES.iter().all(|class| class.is_match(value))
        }
        Check::SameAs(other) => value == draft.value(other),
        Check::KnownGender => Gender::parse(value).is_some(),
        Check::Date => parse_date(value).is_some(),
        // unparseable dates are reported by `Check::Date`
        Check::NotInFuture => parse_date(value).map_or(true, |date| date <= today),
    }
}

/// Error message for `field`, if any of its rules fail
pub fn validate_field(
    field: Field,
    draft: &RegistrationDraft,
    today: NaiveDate,
) -> Option<&'static str> {
    let value = draft.value(field);
    rules_for(field)
        .iter()
        .find(|rule| !passes(rule.check, value, draft, today))
        .map(|rule| rule.message)
}

/// Per-field error messages, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Replace the message for one field; `None` clears it
    pub fn set(&mut self, field: Field, message: Option<&'static str>) {
        match message {
            Some(message) => self.0.insert(field, message),
            None => self.0.remove(&field),
        };
    }
}

/// Raw form input; nothing here is trusted until `validate` succeeds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub gender: String,
    /// `yyyy-mm-dd`, empty when unset
    pub date_of_birth: String,
}

impl RegistrationDraft {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Gender => &self.gender,
            Field::DateOfBirth => &self.date_of_birth,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::Gender => &mut self.gender,
            Field::DateOfBirth => &mut self.date_of_birth,
        };
        *slot = value;
    }

    /// Run every field's rules
    pub fn errors(&self, today: NaiveDate) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            errors.set(field, validate_field(field, self, today));
        }
        errors
    }

    /// Turn the draft into an accepted registration, or report every failing field
    pub fn validate(&self, today: NaiveDate) -> Result<Registration, FieldErrors> {
        let mut errors = self.errors(today);
        let gender = Gender::parse(&self.gender);
        let date_of_birth = parse_date(&self.date_of_birth);

        if let (Some(gender), Some(date_of_birth), true) = (gender, date_of_birth, errors.is_empty()) {
            return Ok(Registration {
                name: self.name.clone(),
                email: self.email.clone(),
                gender,
                date_of_birth,
            });
        }

        // the rules already reject these; never return an empty error set
        if gender.is_none() && errors.get(Field::Gender).is_none() {
            errors.set(Field::Gender, Some("Gender is invalid"));
        }
        if date_of_birth.is_none() && errors.get(Field::DateOfBirth).is_none() {
            errors.set(Field::DateOfBirth, Some("Date of Birth is invalid"));
        }
        Err(errors)
    }
}

/// A draft that passed every rule. Passwords are checked, never kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
}
