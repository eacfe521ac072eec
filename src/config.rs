use std::env;
use std::time::Duration;

#[derive(Clone)]
pub struct Config {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let base_url = env::var("BACKEND_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            base_url,
            request_timeout: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(10)),
        }
    }
}
