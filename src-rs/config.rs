use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/rest";
pub const DEFAULT_COUNTRY: &str = "usa";
pub const HISTORY_DAYS: u32 = 14;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything one smoke run needs. Built once at startup and only read afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunnerConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub country: String,
    pub num_of_days: u32,
    pub timeout: Option<Duration>,
}

impl RunnerConfig {
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            country: DEFAULT_COUNTRY.to_string(),
            num_of_days: HISTORY_DAYS,
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}
