use serde_json::Value;
use shared::abstract_trait::{AlertTrait, NavigatorTrait, Route};
use tracing::info;

/// Navigation adapter for the CLI driver: destinations are announced
/// instead of rendered.
#[derive(Debug, Default)]
pub struct ConsoleNavigator;

impl NavigatorTrait for ConsoleNavigator {
    fn navigate(&self, route: Route, params: Option<Value>) {
        match params {
            Some(params) => info!("Navigating to {route} with params {params}"),
            None => info!("Navigating to {route}"),
        }
    }
}

#[derive(Debug, Default)]
pub struct ConsoleAlert;

impl AlertTrait for ConsoleAlert {
    fn show_alert(&self, title: &str, message: &str) {
        println!("[{title}] {message}");
    }
}
