use serde_json::Value;

use crate::models::Endpoint;

/// Receives what a run produces. The runner never prints on its own.
pub trait Reporter {
    fn start(&mut self, base_url: &str);
    fn section(&mut self, endpoint: Endpoint, body: &Value);
    fn unavailable(&mut self, reason: &str);
}
