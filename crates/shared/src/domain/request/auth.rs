use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::form::{ValidationErrorSet, error_set_from};

/// Registration form as entered on the sign-up screen. Wire keys keep the
/// upstream `reg_*` names expected by the membership backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct RegistrationForm {
    #[serde(rename = "reg_sponser_id")]
    #[validate(custom(function = validate_sponsor_id))]
    pub sponsor_id: String,

    #[serde(rename = "reg_password")]
    #[validate(custom(function = validate_password))]
    pub password: String,

    #[serde(rename = "reg_mem_name")]
    #[validate(custom(function = validate_member_name))]
    pub member_name: String,

    #[serde(rename = "reg_sponser_name")]
    pub sponsor_name: String,

    #[serde(rename = "reg_mobile")]
    #[validate(custom(function = validate_mobile))]
    pub mobile: String,

    #[serde(rename = "reg_email")]
    #[validate(custom(function = validate_email_format))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub user_type: UserType,
    pub mobile_no: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    User,
}

/// Runs every field validator and returns the full per-field error set.
/// An empty set means the form may be submitted.
pub fn validate_form(form: &RegistrationForm) -> ValidationErrorSet {
    match form.validate() {
        Ok(()) => ValidationErrorSet::new(),
        Err(errors) => error_set_from(&errors),
    }
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn validate_sponsor_id(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(field_error("required", "Sponsor ID is required"));
    }
    Ok(())
}

fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(field_error("required", "Password is required"));
    }
    // Length counts UTF-16 code units, the unit the backend's other
    // clients measure passwords in.
    if value.encode_utf16().count() < 6 {
        return Err(field_error(
            "length",
            "Password must be at least 6 characters",
        ));
    }
    Ok(())
}

fn validate_member_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(field_error("required", "Full name is required"));
    }
    Ok(())
}

fn validate_mobile(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(field_error("required", "Mobile number is required"));
    }
    if value.len() != 10 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(field_error("format", "Invalid mobile number"));
    }
    Ok(())
}

// Optional field: an empty email is valid, a non-empty one must fit the
// loose non-whitespace@non-whitespace.non-whitespace shape.
fn validate_email_format(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    if !matches_email_shape(value) {
        return Err(field_error("format", "Invalid email format"));
    }
    Ok(())
}

fn matches_email_shape(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    // Full match of \S+@\S+\.\S+: the earliest '@' leaving a non-empty
    // local part, then any '.' with non-empty segments on both sides.
    let bytes = value.as_bytes();
    let Some(at) = bytes
        .iter()
        .skip(1)
        .position(|&b| b == b'@')
        .map(|i| i + 1)
    else {
        return false;
    };

    (at + 2..bytes.len().saturating_sub(1)).any(|j| bytes[j] == b'.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::FormField;

    fn complete_form() -> RegistrationForm {
        RegistrationForm {
            sponsor_id: "S1".to_string(),
            password: "abcdef".to_string(),
            member_name: "Jane Doe".to_string(),
            sponsor_name: String::new(),
            mobile: "9876543210".to_string(),
            email: String::new(),
        }
    }

    #[test]
    fn complete_form_has_no_errors() {
        assert!(validate_form(&complete_form()).is_empty());
    }

    #[test]
    fn every_invalid_field_is_reported_at_once() {
        let form = RegistrationForm {
            sponsor_id: String::new(),
            password: "12".to_string(),
            member_name: String::new(),
            sponsor_name: String::new(),
            mobile: "123".to_string(),
            email: "bad".to_string(),
        };

        let errors = validate_form(&form);

        assert_eq!(errors.len(), 5);
        assert_eq!(errors[&FormField::SponsorId], "Sponsor ID is required");
        assert_eq!(
            errors[&FormField::Password],
            "Password must be at least 6 characters"
        );
        assert_eq!(errors[&FormField::MemberName], "Full name is required");
        assert_eq!(errors[&FormField::Mobile], "Invalid mobile number");
        assert_eq!(errors[&FormField::Email], "Invalid email format");
    }

    #[test]
    fn whitespace_only_required_fields_are_rejected() {
        let mut form = complete_form();
        form.sponsor_id = "   ".to_string();
        form.member_name = "\t".to_string();

        let errors = validate_form(&form);

        assert_eq!(errors[&FormField::SponsorId], "Sponsor ID is required");
        assert_eq!(errors[&FormField::MemberName], "Full name is required");
    }

    #[test]
    fn empty_password_gets_the_required_message() {
        let mut form = complete_form();
        form.password = String::new();

        let errors = validate_form(&form);

        assert_eq!(errors[&FormField::Password], "Password is required");
    }

    #[test]
    fn password_length_counts_utf16_units() {
        // Three astral-plane characters are six UTF-16 units.
        let mut form = complete_form();
        form.password = "😀😀😀".to_string();
        assert!(validate_form(&form).is_empty());

        form.password = "😀😀".to_string();
        assert_eq!(
            validate_form(&form)[&FormField::Password],
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn mobile_must_be_exactly_ten_digits() {
        for bad in ["987654321", "98765432101", "98765x3210", ""] {
            let mut form = complete_form();
            form.mobile = bad.to_string();
            assert!(
                validate_form(&form).contains_key(&FormField::Mobile),
                "expected {bad:?} to be rejected"
            );
        }

        let mut form = complete_form();
        form.mobile = "0123456789".to_string();
        assert!(validate_form(&form).is_empty());
    }

    #[test]
    fn email_is_optional_but_checked_when_present() {
        let mut form = complete_form();
        form.email = String::new();
        assert!(validate_form(&form).is_empty());

        for good in [
            "jane@example.com",
            "a@b.cd",
            "x@y@z.co",
            // Terminal dot is fine when an earlier dot completes the shape.
            "a@b.c.",
            // A leading '@' may sit inside the local part of a later '@'.
            "@a@b.c",
        ] {
            form.email = good.to_string();
            assert!(
                validate_form(&form).is_empty(),
                "expected {good:?} to be accepted"
            );
        }

        for bad in ["bad", "a @b.c", "@b.c", "a@b.", "a@.", "a@.c", "a@bc"] {
            form.email = bad.to_string();
            assert_eq!(
                validate_form(&form).get(&FormField::Email),
                Some(&"Invalid email format".to_string()),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn registration_form_uses_upstream_wire_keys() {
        let form = complete_form();
        let value = serde_json::to_value(&form).unwrap();

        assert_eq!(value["reg_sponser_id"], "S1");
        assert_eq!(value["reg_mem_name"], "Jane Doe");
        assert_eq!(value["reg_mobile"], "9876543210");
    }

    #[test]
    fn login_request_encodes_user_type_as_lowercase() {
        let request = LoginRequest {
            user_type: UserType::User,
            mobile_no: "9876543210".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["user_type"], "user");
        assert_eq!(value["mobile_no"], "9876543210");
    }
}
