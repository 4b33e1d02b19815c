use serde_json::Value;

use crate::domain::form::ValidationErrorSet;

/// Terminal result of one registration submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    NavigatedToSignIn,
    Invalid(ValidationErrorSet),
    AlreadySubmitting,
    Failed,
}

/// Terminal result of one login submit attempt. "Invalid credentials" and
/// transport failure stay distinguishable here even though they collapse
/// to the same severity at the alert layer.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    NavigatedToHome,
    MissingMobileNumber,
    AlreadySubmitting,
    InvalidCredentials,
    Failed,
}

/// Truthiness of a response body under the upstream contract: null, false,
/// numeric zero and the empty string are falsy, everything else (empty
/// objects and arrays included) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
