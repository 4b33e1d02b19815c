use std::sync::Arc;

pub type DynAlert = Arc<dyn AlertTrait + Send + Sync>;

/// User-facing notification; whether it blocks is the host's concern.
pub trait AlertTrait {
    fn show_alert(&self, title: &str, message: &str);
}
