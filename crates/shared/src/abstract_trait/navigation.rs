use serde_json::Value;
use std::sync::Arc;

pub type DynNavigator = Arc<dyn NavigatorTrait + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Register,
    SignIn,
    Home,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Register => "Register",
            Route::SignIn => "SignIn",
            Route::Home => "Home",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Abstract over whatever routing mechanism hosts the screens.
pub trait NavigatorTrait {
    fn navigate(&self, route: Route, params: Option<Value>);
}
