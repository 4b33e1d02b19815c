pub mod auth;

pub use self::auth::{LoginRequest, RegistrationForm, UserType, validate_form};
