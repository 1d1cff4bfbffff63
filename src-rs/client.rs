use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Url;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::RunnerConfig;
use crate::error::{Error, Result};

/// Blocking JSON client bound to one base URL and one header set.
pub struct RestClient {
    pub base_url: String,
    headers: HeaderMap,
    client: Client,
}

impl RestClient {
    pub fn new(config: &RunnerConfig) -> Result<Self> {
        Url::parse(&config.base_url)
            .map_err(|err| Error::InvalidBaseUrl(format!("{} for {}", err, config.base_url)))?;

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            headers: build_headers(config.token.as_deref())?,
            client,
        })
    }

    pub fn get(&self, path: &str) -> Result<Value> {
        let url = self.url(path);
        debug!(method = "GET", %url, "sending request");
        self.send(self.client.get(url))
    }

    pub fn post<T: Serialize + ?Sized>(&self, path: &str, payload: &T) -> Result<Value> {
        let url = self.url(path);
        debug!(method = "POST", %url, "sending request");
        self.send(self.client.post(url).json(payload))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // Status is not checked: the service reports problems inside the JSON body.
    fn send(&self, builder: RequestBuilder) -> Result<Value> {
        let resp = builder.headers(self.headers.clone()).send()?;
        debug!(status = resp.status().as_u16(), "response received");
        Ok(resp.json::<Value>()?)
    }
}

pub fn build_headers(token: Option<&str>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(token) = token {
        let value = format!("Bearer {}", token);
        let mut header = HeaderValue::from_str(&value).map_err(|_| Error::InvalidToken)?;
        header.set_sensitive(true);
        headers.insert(AUTHORIZATION, header);
    }
    Ok(headers)
}
