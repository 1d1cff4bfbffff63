use serde_json::Value;

use rest_smoke_rs::{Endpoint, Reporter, ResultSet};

use crate::cli::Variant;

/// Prints each section to stdout the way the original smoke scripts did.
#[derive(Default)]
pub struct Console {
    pub summary: bool,
}

impl Console {
    pub fn new(summary: bool) -> Self {
        Self { summary }
    }
}

impl Reporter for Console {
    fn start(&mut self, base_url: &str) {
        println!("[REST URL] {}", base_url);
    }

    fn section(&mut self, endpoint: Endpoint, body: &Value) {
        println!("{}", section_header(endpoint));
        println!("{}", pretty(body));
        if self.summary {
            if let Some(line) = summary_line(body) {
                println!("{}", line);
            }
        }
    }

    fn unavailable(&mut self, reason: &str) {
        println!("[Server Connection Error]: {}", reason);
    }
}

pub fn section_header(endpoint: Endpoint) -> String {
    format!("---- Results from {} -----", endpoint.path())
}

pub fn pretty(body: &Value) -> String {
    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
}

pub fn summary_line(body: &Value) -> Option<String> {
    let set = ResultSet::from_value(body)?;
    Some(format!(
        "records: {}, message: {}",
        set.record_count(),
        set.message_text().as_deref().unwrap_or("-")
    ))
}

pub fn usage(variant: Variant) {
    match variant {
        Variant::Open => println!("Usage: rest-smoke [--base <url>] [--timeout <secs>] [--summary]"),
        Variant::Authenticated => {
            println!("Usage: rest-smoke-auth [--base <url>] [--timeout <secs>] [--summary] <token>");
            println!("  <token>            Bearer token sent with every request");
        }
    }
    println!("  --base <url>       REST base URL (env REST_SMOKE_URL)");
    println!("  --timeout <secs>   Per-request timeout, 0 disables (env REST_SMOKE_TIMEOUT)");
    println!("  --summary          Print a one-line summary after each result");
}

pub fn error(msg: &str) {
    eprintln!("error: {}", msg);
}
