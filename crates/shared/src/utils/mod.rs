mod errors;
mod log;

pub use self::errors::AppError;
pub use self::log::init_logger;
