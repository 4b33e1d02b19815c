use anyhow::{Context, Result};
use shared::{
    abstract_trait::{DynAlert, DynNavigator},
    config::Config,
};
use std::sync::Arc;

use crate::{
    console::{ConsoleAlert, ConsoleNavigator},
    di::DependenciesInject,
};

pub struct AppState {
    pub navigator: DynNavigator,
    pub alerts: DynAlert,
    pub di_container: DependenciesInject,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("navigator", &"DynNavigator")
            .field("alerts", &"DynAlert")
            .field("di_container", &self.di_container)
            .finish()
    }
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let navigator = Arc::new(ConsoleNavigator) as DynNavigator;
        let alerts = Arc::new(ConsoleAlert) as DynAlert;

        let di_container = DependenciesInject::new(config, navigator.clone(), alerts.clone())
            .context("Failed to initialize dependency injection container")?;

        Ok(Self {
            navigator,
            alerts,
            di_container,
        })
    }
}
