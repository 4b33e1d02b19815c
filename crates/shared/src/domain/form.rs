use std::collections::BTreeMap;

use validator::ValidationErrors;

use crate::domain::request::RegistrationForm;

/// Per-field error map; a field absent from the set is valid.
pub type ValidationErrorSet = BTreeMap<FormField, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    SponsorId,
    Password,
    MemberName,
    SponsorName,
    Mobile,
    Email,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::SponsorId => "sponsor_id",
            FormField::Password => "password",
            FormField::MemberName => "member_name",
            FormField::SponsorName => "sponsor_name",
            FormField::Mobile => "mobile",
            FormField::Email => "email",
        }
    }

    fn from_field_name(name: &str) -> Option<Self> {
        match name {
            "sponsor_id" => Some(FormField::SponsorId),
            "password" => Some(FormField::Password),
            "member_name" => Some(FormField::MemberName),
            "sponsor_name" => Some(FormField::SponsorName),
            "mobile" => Some(FormField::Mobile),
            "email" => Some(FormField::Email),
            _ => None,
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts validator output into the typed per-field set, keeping the
/// first message reported for each field.
pub fn error_set_from(errors: &ValidationErrors) -> ValidationErrorSet {
    let mut set = ValidationErrorSet::new();

    for (name, field_errors) in errors.field_errors() {
        let Some(field) = FormField::from_field_name(name.as_ref()) else {
            continue;
        };
        let Some(error) = field_errors.first() else {
            continue;
        };

        let message = error
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| error.code.to_string());

        set.insert(field, message);
    }

    set
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Screen-local form state: created empty on mount, mutated only through
/// [`reduce`], discarded on navigation away.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub form: RegistrationForm,
    pub errors: ValidationErrorSet,
    pub phase: SubmitPhase,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    FieldChanged(FormField, String),
    ValidationFailed(ValidationErrorSet),
    SubmissionStarted,
    SubmissionSucceeded,
    SubmissionFailed,
}

/// Pure reducer over the form state machine:
/// Idle -> Submitting -> Idle, with errors recomputed in full on a failed
/// validation and cleared per field the moment that field is edited.
pub fn reduce(mut state: FormState, event: FormEvent) -> FormState {
    match event {
        FormEvent::FieldChanged(field, value) => {
            set_field(&mut state.form, field, value);
            // Optimistic clear: only this field, no re-validation yet.
            state.errors.remove(&field);
        }
        FormEvent::ValidationFailed(errors) => {
            state.errors = errors;
            state.phase = SubmitPhase::Idle;
        }
        FormEvent::SubmissionStarted => {
            state.phase = SubmitPhase::Submitting;
        }
        FormEvent::SubmissionSucceeded => {
            state.errors.clear();
            state.phase = SubmitPhase::Idle;
        }
        FormEvent::SubmissionFailed => {
            state.phase = SubmitPhase::Idle;
        }
    }

    state
}

fn set_field(form: &mut RegistrationForm, field: FormField, value: String) {
    match field {
        FormField::SponsorId => form.sponsor_id = value,
        FormField::Password => form.password = value,
        FormField::MemberName => form.member_name = value,
        FormField::SponsorName => form.sponsor_name = value,
        FormField::Mobile => form.mobile = value,
        FormField::Email => form.email = value,
    }
}
