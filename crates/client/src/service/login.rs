use async_trait::async_trait;
use serde_json::json;
use shared::{
    abstract_trait::{DynAlert, DynLoginApi, DynNavigator, LoginServiceTrait, Route},
    domain::{
        request::LoginRequest,
        response::{LoginOutcome, is_truthy},
    },
};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info};

use super::FlagGuard;

const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";

pub struct LoginService {
    login_api: DynLoginApi,
    navigator: DynNavigator,
    alerts: DynAlert,
    loading: AtomicBool,
}

impl std::fmt::Debug for LoginService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginService")
            .field("login_api", &"DynLoginApi")
            .field("navigator", &"DynNavigator")
            .field("alerts", &"DynAlert")
            .field("loading", &self.loading)
            .finish()
    }
}

impl LoginService {
    pub fn new(login_api: DynLoginApi, navigator: DynNavigator, alerts: DynAlert) -> Self {
        Self {
            login_api,
            navigator,
            alerts,
            loading: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl LoginServiceTrait for LoginService {
    async fn submit(&self, request: &LoginRequest) -> LoginOutcome {
        // Presence check only: login intentionally skips the 10-digit rule
        // that registration enforces. The loading flag stays untouched.
        if request.mobile_no.is_empty() {
            self.alerts.show_alert("Error", "Please enter mobile number");
            return LoginOutcome::MissingMobileNumber;
        }

        if self.loading.swap(true, Ordering::SeqCst) {
            info!("Login submit ignored, one already in flight");
            return LoginOutcome::AlreadySubmitting;
        }
        // Cleared on every path out of this function, cancellation included.
        let _loading = FlagGuard(&self.loading);

        info!("Verifying login for mobile {}", request.mobile_no);

        match self.login_api.login_verify(request).await {
            Ok(body) if is_truthy(&body) => {
                info!("Login verified for mobile {}", request.mobile_no);
                self.navigator
                    .navigate(Route::Home, Some(json!({ "userData": body })));
                LoginOutcome::NavigatedToHome
            }
            Ok(_) => {
                info!("Login declined for mobile {}", request.mobile_no);
                self.alerts.show_alert("Error", "Invalid credentials");
                LoginOutcome::InvalidCredentials
            }
            Err(err) => {
                // Diagnostic only; the alert stays generic.
                error!("Login error: {err}");
                self.alerts.show_alert("Error", LOGIN_FAILED_MESSAGE);
                LoginOutcome::Failed
            }
        }
    }

    fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }
}
