pub mod login;
pub mod register;

pub use self::login::LoginService;
pub use self::register::RegistrationService;

use std::future::Future;

use shared::{
    abstract_trait::{DynLoginService, DynRegistrationService},
    domain::{
        request::{LoginRequest, RegistrationForm},
        response::{LoginOutcome, RegistrationOutcome},
    },
};
use tokio::task::JoinHandle;

/// Handle to a submission running on the runtime. Dropping it aborts the
/// in-flight request, so a screen teardown cancels its own submission.
#[derive(Debug)]
pub struct SubmissionHandle<T> {
    handle: Option<JoinHandle<T>>,
}

impl<T: Send + 'static> SubmissionHandle<T> {
    pub fn spawn(future: impl Future<Output = T> + Send + 'static) -> Self {
        Self {
            handle: Some(tokio::spawn(future)),
        }
    }

    pub fn abort(&self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }

    /// Waits for the submission; `None` means it was cancelled.
    pub async fn join(mut self) -> Option<T> {
        match self.handle.take() {
            Some(handle) => handle.await.ok(),
            None => None,
        }
    }
}

impl<T> Drop for SubmissionHandle<T> {
    fn drop(&mut self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}

pub fn spawn_registration(
    service: DynRegistrationService,
    form: RegistrationForm,
) -> SubmissionHandle<RegistrationOutcome> {
    SubmissionHandle::spawn(async move { service.submit(&form).await })
}

pub fn spawn_login(
    service: DynLoginService,
    request: LoginRequest,
) -> SubmissionHandle<LoginOutcome> {
    SubmissionHandle::spawn(async move { service.submit(&request).await })
}

// Releases an in-flight/loading flag on every exit path, including the
// drop of a cancelled submission future.
pub(crate) struct FlagGuard<'a>(pub(crate) &'a std::sync::atomic::AtomicBool);

impl Drop for FlagGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, std::sync::atomic::Ordering::SeqCst);
    }
}
