use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    pub fn init() -> Result<Self> {
        let api_base_url =
            std::env::var("API_BASE_URL").context("Missing environment variable: API_BASE_URL")?;

        Ok(Self { api_base_url })
    }
}
