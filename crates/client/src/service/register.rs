use async_trait::async_trait;
use shared::{
    abstract_trait::{DynAlert, DynNavigator, DynSignupApi, RegistrationServiceTrait, Route},
    domain::{
        request::{RegistrationForm, validate_form},
        response::{RegistrationOutcome, is_truthy},
    },
};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info};

use super::FlagGuard;

const SIGNUP_FAILED_MESSAGE: &str = "Failed to sign up. Please try again.";

pub struct RegistrationService {
    signup_api: DynSignupApi,
    navigator: DynNavigator,
    alerts: DynAlert,
    in_flight: AtomicBool,
}

impl std::fmt::Debug for RegistrationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationService")
            .field("signup_api", &"DynSignupApi")
            .field("navigator", &"DynNavigator")
            .field("alerts", &"DynAlert")
            .field("in_flight", &self.in_flight)
            .finish()
    }
}

impl RegistrationService {
    pub fn new(signup_api: DynSignupApi, navigator: DynNavigator, alerts: DynAlert) -> Self {
        Self {
            signup_api,
            navigator,
            alerts,
            in_flight: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl RegistrationServiceTrait for RegistrationService {
    async fn submit(&self, form: &RegistrationForm) -> RegistrationOutcome {
        // Full validation first: every invalid field is reported together
        // and nothing touches the network.
        let errors = validate_form(form);
        if !errors.is_empty() {
            info!("Registration rejected with {} field errors", errors.len());
            return RegistrationOutcome::Invalid(errors);
        }

        if self.in_flight.swap(true, Ordering::SeqCst) {
            info!("Registration submit ignored, one already in flight");
            return RegistrationOutcome::AlreadySubmitting;
        }
        let _in_flight = FlagGuard(&self.in_flight);

        info!("Submitting registration for {}", form.member_name);

        match self.signup_api.signup(form).await {
            Ok(body) if is_truthy(&body) => {
                info!("Registration succeeded for {}", form.member_name);
                self.navigator.navigate(Route::SignIn, None);
                RegistrationOutcome::NavigatedToSignIn
            }
            Ok(_) => {
                info!("Registration declined by server");
                self.alerts.show_alert("Error", SIGNUP_FAILED_MESSAGE);
                RegistrationOutcome::Failed
            }
            Err(err) => {
                error!("Signup error: {err}");
                self.alerts.show_alert("Error", SIGNUP_FAILED_MESSAGE);
                RegistrationOutcome::Failed
            }
        }
    }

    fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }
}
