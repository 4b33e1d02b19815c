use crate::{
    api::HttpAuthApi,
    service::{LoginService, RegistrationService},
};
use shared::{
    abstract_trait::{
        DynAlert, DynLoginApi, DynLoginService, DynNavigator, DynRegistrationService, DynSignupApi,
    },
    config::Config,
};

use anyhow::{Context, Result};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub registration_service: DynRegistrationService,
    pub login_service: DynLoginService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("registration_service", &"DynRegistrationService")
            .field("login_service", &"DynLoginService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(config: &Config, navigator: DynNavigator, alerts: DynAlert) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("Failed to build the HTTP client")?;

        let auth_api = Arc::new(HttpAuthApi::new(http, config.api_base_url.clone()));
        let signup_api: DynSignupApi = auth_api.clone();
        let login_api: DynLoginApi = auth_api;

        let registration_service = Arc::new(RegistrationService::new(
            signup_api,
            navigator.clone(),
            alerts.clone(),
        )) as DynRegistrationService;

        let login_service =
            Arc::new(LoginService::new(login_api, navigator, alerts)) as DynLoginService;

        Ok(Self {
            registration_service,
            login_service,
        })
    }
}
