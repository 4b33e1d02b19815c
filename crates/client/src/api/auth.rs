use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use shared::{
    abstract_trait::{LoginApiTrait, SignupApiTrait},
    domain::request::{LoginRequest, RegistrationForm},
    utils::AppError,
};
use tracing::info;

const LOGIN_VERIFY_PATH: &str = "api_.php/login_verify";
const REGISTRATION_PATH: &str = "api_.php/registration";

/// reqwest-backed implementation of both remote auth capabilities. Bodies
/// go out form-urlencoded; responses come back as raw JSON values so the
/// workflows can apply the truthy/falsy contract themselves.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    async fn post_form<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Value, AppError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);

        info!("POST {url}");

        let response = self
            .http
            .post(&url)
            .form(body)
            .send()
            .await?
            .error_for_status()?;

        let text = response.text().await?;

        // Non-JSON bodies stay as plain strings, so an empty body remains
        // falsy under the response contract.
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}

#[async_trait]
impl SignupApiTrait for HttpAuthApi {
    async fn signup(&self, form: &RegistrationForm) -> Result<Value, AppError> {
        self.post_form(REGISTRATION_PATH, form).await
    }
}

#[async_trait]
impl LoginApiTrait for HttpAuthApi {
    async fn login_verify(&self, request: &LoginRequest) -> Result<Value, AppError> {
        self.post_form(LOGIN_VERIFY_PATH, request).await
    }
}
