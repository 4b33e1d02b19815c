use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::{
    domain::{
        request::{LoginRequest, RegistrationForm},
        response::{LoginOutcome, RegistrationOutcome},
    },
    utils::AppError,
};

pub type DynSignupApi = Arc<dyn SignupApiTrait + Send + Sync>;

/// Remote account-creation capability; a truthy response body means the
/// account was created.
#[async_trait]
pub trait SignupApiTrait {
    async fn signup(&self, form: &RegistrationForm) -> Result<Value, AppError>;
}

pub type DynLoginApi = Arc<dyn LoginApiTrait + Send + Sync>;

/// Remote login verification capability; the raw response body doubles as
/// the success signal and the navigation payload.
#[async_trait]
pub trait LoginApiTrait {
    async fn login_verify(&self, request: &LoginRequest) -> Result<Value, AppError>;
}

pub type DynRegistrationService = Arc<dyn RegistrationServiceTrait + Send + Sync>;

#[async_trait]
pub trait RegistrationServiceTrait {
    async fn submit(&self, form: &RegistrationForm) -> RegistrationOutcome;
    fn is_submitting(&self) -> bool;
}

pub type DynLoginService = Arc<dyn LoginServiceTrait + Send + Sync>;

#[async_trait]
pub trait LoginServiceTrait {
    async fn submit(&self, request: &LoginRequest) -> LoginOutcome;
    fn is_loading(&self) -> bool;
}
