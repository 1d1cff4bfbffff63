use std::collections::HashMap;
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use std::thread;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::Value;

use rest_smoke_rs::{Endpoint, Reporter};

const PREFIX: &str = "/rest";

#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<Recorded>>>,
    replies: Arc<HashMap<String, String>>,
}

/// In-process stand-in for the sample REST service, running on its own runtime thread.
pub struct MockServer {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockServer {
    pub fn start() -> Self {
        Self::with_replies(&[])
    }

    /// Overrides the raw response body for the given paths (e.g. `("/test", "null")`).
    pub fn with_replies(overrides: &[(&str, &str)]) -> Self {
        let mut replies = default_replies();
        for (path, body) in overrides {
            replies.insert(path.to_string(), body.to_string());
        }
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            requests: requests.clone(),
            replies: Arc::new(replies),
        };
        let app = Router::new().fallback(record).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        let addr = listener.local_addr().expect("mock server addr");
        listener.set_nonblocking(true).expect("nonblocking listener");
        thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("mock runtime");
            rt.block_on(async move {
                axum::Server::from_tcp(listener)
                    .expect("mock listener")
                    .serve(app.into_make_service())
                    .await
                    .expect("mock server");
            });
        });

        Self { addr, requests }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}{}", self.addr, PREFIX)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }
}

/// Listener that accepts connections and drops them before any response is written.
/// Stays bound for the whole test process.
pub fn closing_listener() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind closing listener");
    let addr = listener.local_addr().expect("closing listener addr");
    thread::spawn(move || {
        for stream in listener.incoming() {
            drop(stream);
        }
    });
    addr
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().trim_start_matches(PREFIX).to_string();
    let recorded = Recorded {
        method: method.to_string(),
        path: path.clone(),
        authorization: header_text(&headers, header::AUTHORIZATION),
        content_type: header_text(&headers, header::CONTENT_TYPE),
        body: serde_json::from_slice(&body).ok(),
    };
    state.requests.lock().expect("requests lock").push(recorded);

    match state.replies.get(&path) {
        Some(reply) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            reply.clone(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

fn header_text(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}

fn default_replies() -> HashMap<String, String> {
    let mut replies = HashMap::new();
    replies.insert(
        "/test".to_string(),
        r#"{"keys":["apple","orange","banana"],"records":[{"apple":1,"orange":2,"banana":3},{"apple":7,"orange":5,"banana":4},{"apple":11,"orange":23,"banana":31}],"message":null}"#.to_string(),
    );
    replies.insert(
        "/countries".to_string(),
        r#"{"keys":["country","shortname"],"records":[{"country":"USA","shortname":"usa"},{"country":"Japan","shortname":"japan"}],"message":"[COVID-19] Number of countries: 2"}"#.to_string(),
    );
    replies.insert(
        "/country_info".to_string(),
        r#"{"keys":["active","critical","recovered","cases","deaths","tests"],"records":[{"active":10,"critical":1,"recovered":90,"cases":101,"deaths":1,"tests":500}],"message":"[COVID-19] Country info for usa"}"#.to_string(),
    );
    replies.insert(
        "/history".to_string(),
        r#"{"keys":["date","num_cases","num_deaths"],"records":[{"date":"3/9/23","num_cases":103802702,"num_deaths":1123836}],"message":"[COVID-19] History for usa"}"#.to_string(),
    );
    replies
}

/// Collects everything a run reports.
#[derive(Default)]
pub struct Transcript {
    pub base_url: Option<String>,
    pub sections: Vec<(Endpoint, Value)>,
    pub unavailable: Vec<String>,
}

impl Transcript {
    pub fn endpoints(&self) -> Vec<Endpoint> {
        self.sections.iter().map(|(e, _)| *e).collect()
    }
}

impl Reporter for Transcript {
    fn start(&mut self, base_url: &str) {
        self.base_url = Some(base_url.to_string());
    }

    fn section(&mut self, endpoint: Endpoint, body: &Value) {
        self.sections.push((endpoint, body.clone()));
    }

    fn unavailable(&mut self, reason: &str) {
        self.unavailable.push(reason.to_string());
    }
}
