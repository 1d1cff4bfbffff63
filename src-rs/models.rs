use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The four calls of a smoke run, in the order they are issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Endpoint {
    Test,
    Countries,
    CountryInfo,
    History,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::Test,
        Endpoint::Countries,
        Endpoint::CountryInfo,
        Endpoint::History,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Test => "/test",
            Endpoint::Countries => "/countries",
            Endpoint::CountryInfo => "/country_info",
            Endpoint::History => "/history",
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct CountryInfoRequest {
    pub country: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct HistoryRequest {
    pub country: String,
    pub num_of_days: u32,
}

/// Envelope returned by the sample REST service: column names, rows and a status message.
#[derive(Clone, Debug, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub keys: Vec<String>,
    #[serde(default)]
    pub records: Value,
    #[serde(default)]
    pub message: Value,
}

impl ResultSet {
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    /// Status text; non-string messages are rendered as compact JSON.
    pub fn message_text(&self) -> Option<String> {
        match &self.message {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn record_count(&self) -> usize {
        match &self.records {
            Value::Array(items) => items.len(),
            Value::Null => 0,
            _ => 1,
        }
    }
}
