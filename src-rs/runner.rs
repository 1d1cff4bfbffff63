use serde_json::Value;
use tracing::info;

use crate::client::RestClient;
use crate::config::RunnerConfig;
use crate::error::Result;
use crate::models::{CountryInfoRequest, Endpoint, HistoryRequest};
use crate::report::Reporter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// `/test` failed or came back empty; nothing else was sent.
    ServerUnavailable,
}

pub struct Runner {
    pub config: RunnerConfig,
    client: RestClient,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Result<Self> {
        let client = RestClient::new(&config)?;
        Ok(Self { config, client })
    }

    /// Issues `/test`, `/countries`, `/country_info` and `/history` in that order.
    ///
    /// Only the liveness call is guarded: a fault there ends the run with
    /// [`Outcome::ServerUnavailable`]. Faults on the later calls are returned as errors.
    pub fn run(&self, report: &mut dyn Reporter) -> Result<Outcome> {
        report.start(&self.client.base_url);

        let alive = match self.client.get(Endpoint::Test.path()) {
            Ok(Value::Null) => {
                info!("liveness check returned no data");
                report.unavailable(&format!("empty response from {}", Endpoint::Test.path()));
                None
            }
            Ok(body) => Some(body),
            Err(err) => {
                info!(error = %err, "liveness check failed");
                report.unavailable(&err.to_string());
                None
            }
        };
        let Some(body) = alive else {
            info!("server unavailable, stopping");
            return Ok(Outcome::ServerUnavailable);
        };
        report.section(Endpoint::Test, &body);

        let body = self.client.get(Endpoint::Countries.path())?;
        report.section(Endpoint::Countries, &body);

        let request = CountryInfoRequest {
            country: self.config.country.clone(),
        };
        let body = self.client.post(Endpoint::CountryInfo.path(), &request)?;
        report.section(Endpoint::CountryInfo, &body);

        let request = HistoryRequest {
            country: self.config.country.clone(),
            num_of_days: self.config.num_of_days,
        };
        let body = self.client.post(Endpoint::History.path(), &request)?;
        report.section(Endpoint::History, &body);

        info!(country = %self.config.country, "run completed");
        Ok(Outcome::Completed)
    }
}
