use anyhow::Error as AnyhowError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Request error: {0}")]
    RequestError(#[from] ReqwestError),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<AnyhowError> for AppError {
    fn from(err: AnyhowError) -> Self {
        AppError::InternalError(err.to_string())
    }
}
