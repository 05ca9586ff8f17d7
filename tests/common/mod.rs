use std::sync::Mutex;

use http::{HeaderMap, HeaderName, HeaderValue};
use http_cache::{Request, Response, Result, Transport};

/// A canned-response double for [`Transport`]: hands out responses in
/// order and records every request it was called with, so end-to-end
/// tests can assert on how many origin round trips a scenario actually
/// triggered.
pub struct MockTransport {
    responses: Mutex<Vec<Response>>,
    pub calls: Mutex<Vec<Request>>,
}

impl MockTransport {
    pub fn new(responses: Vec<Response>) -> Self {
        Self { responses: Mutex::new(responses), calls: Mutex::new(Vec::new()) }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Transport for MockTransport {
    fn round_trip(&self, request: &Request) -> Result<Response> {
        self.calls.lock().unwrap().push(request.clone());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            panic!("MockTransport ran out of canned responses");
        }
        Ok(responses.remove(0))
    }
}

/// Turns on `env_logger` for the duration of the test binary, so the
/// orchestrator's `debug!` output is visible with `RUST_LOG=debug cargo
/// test -- --nocapture`. Safe to call from every test; only the first
/// call does anything.
pub fn init_logging() {
    let _ = env_logger::try_init();
}

pub fn header_map(pairs: &[(&str, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.insert(
            HeaderName::from_bytes(name.as_bytes()).unwrap(),
            HeaderValue::from_str(value).unwrap(),
        );
    }
    map
}
