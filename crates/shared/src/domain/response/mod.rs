pub mod auth;

pub use self::auth::{LoginOutcome, RegistrationOutcome, is_truthy};
