pub mod alert;
pub mod auth;
pub mod navigation;

pub use self::alert::{AlertTrait, DynAlert};

pub use self::auth::{
    DynLoginApi, DynLoginService, DynRegistrationService, DynSignupApi, LoginApiTrait,
    LoginServiceTrait, RegistrationServiceTrait, SignupApiTrait,
};

pub use self::navigation::{DynNavigator, NavigatorTrait, Route};
