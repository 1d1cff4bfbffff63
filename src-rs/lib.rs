pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod runner;

pub use client::RestClient;
pub use config::RunnerConfig;
pub use error::{Error, Result};
pub use models::{CountryInfoRequest, Endpoint, HistoryRequest, ResultSet};
pub use report::Reporter;
pub use runner::{Outcome, Runner};
