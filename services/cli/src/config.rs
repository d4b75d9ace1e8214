use std::env;
use std::path::PathBuf;

/// Batch runner configuration, sourced from the environment (with a
/// `.env` file honored when present). CLI flags override these values.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let input = PathBuf::from(env::var("APP_INPUT").unwrap_or_else(|_| "data.json".to_string()));
        let output =
            PathBuf::from(env::var("APP_OUTPUT").unwrap_or_else(|_| "output.json".to_string()));
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            input,
            output,
            log_level,
        }
    }
}
