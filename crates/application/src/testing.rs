//! In-memory port implementations shared by the unit tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use gatekeeper_domain::{request::RequestSpec, response::ResponseSpec};
use parking_lot::Mutex;
use url::Url;

use crate::ports::{Clock, HttpClient, HttpClientError, KeyValueStorage, Navigator, StorageError};

#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

pub struct RecordingNavigator {
    location: Mutex<Url>,
    navigations: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    #[allow(clippy::unwrap_used)]
    pub fn at(location: &str) -> Self {
        Self {
            location: Mutex::new(Url::parse(location).unwrap()),
            navigations: Mutex::new(Vec::new()),
        }
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().clone()
    }

    pub fn location(&self) -> String {
        self.location.lock().to_string()
    }
}

impl Navigator for RecordingNavigator {
    fn current_location(&self) -> Url {
        self.location.lock().clone()
    }

    fn navigate(&self, url: &Url) {
        self.navigations.lock().push(url.to_string());
        *self.location.lock() = url.clone();
    }

    fn replace_location(&self, url: &Url) {
        *self.location.lock() = url.clone();
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    #[allow(clippy::unwrap_used)]
    pub fn at_millis(millis: i64) -> Self {
        Self(Utc.timestamp_millis_opt(millis).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// HTTP client answering from canned responses keyed by URL path.
///
/// Unknown paths answer 404. Every request is recorded.
#[derive(Default)]
pub struct MockHttpClient {
    routes: Mutex<HashMap<String, Result<ResponseSpec, HttpClientError>>>,
    calls: Mutex<Vec<RequestSpec>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json(self, path: &str, status: u16, body: serde_json::Value) -> Self {
        self.routes
            .lock()
            .insert(path.to_string(), Ok(ResponseSpec::json_body(status, &body)));
        self
    }

    pub fn fail(self, path: &str, error: HttpClientError) -> Self {
        self.routes.lock().insert(path.to_string(), Err(error));
        self
    }

    pub fn calls(&self) -> Vec<RequestSpec> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn execute(&self, request: &RequestSpec) -> Result<ResponseSpec, HttpClientError> {
        self.calls.lock().push(request.clone());
        let path = Url::parse(&request.url)
            .map_err(|e| HttpClientError::InvalidUrl(e.to_string()))?
            .path()
            .to_string();
        self.routes.lock().get(&path).cloned().unwrap_or_else(|| {
            Ok(ResponseSpec::json_body(
                404,
                &serde_json::json!({ "detail": "Not Found" }),
            ))
        })
    }
}
