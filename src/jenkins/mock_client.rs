use crate::jenkins::query::{RawResponse, VerifierClient};
use jenkins_sdk::client::AsyncClient;
use jenkins_sdk::{Endpoint, JenkinsError};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Scripted Jenkins server for tests.
///
/// Responses for an endpoint are served in order, the last one repeats.
pub struct MockJenkinsClient {
    url: String,
    responses: Mutex<HashMap<String, VecDeque<Result<String, String>>>>,
    location: Mutex<Option<Result<Option<String>, String>>>,
    downloads: Mutex<HashMap<String, Result<RawResponse, String>>>,
    calls: Mutex<Vec<String>>,
}

impl MockJenkinsClient {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            responses: Mutex::new(HashMap::new()),
            location: Mutex::new(None),
            downloads: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn push(self, endpoint: &impl Endpoint, response: Result<String, String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .entry(endpoint.endpoint())
            .or_default()
            .push_back(response);
        self
    }

    pub fn respond(self, endpoint: &impl Endpoint, body: &str) -> Self {
        self.push(endpoint, Ok(body.to_string()))
    }

    pub fn fail(self, endpoint: &impl Endpoint, msg: &str) -> Self {
        self.push(endpoint, Err(msg.to_string()))
    }

    pub fn location(self, location: Option<&str>) -> Self {
        *self.location.lock().unwrap() = Some(Ok(location.map(|l| l.to_string())));
        self
    }

    pub fn download(self, url: &str, status: u16, body: &str) -> Self {
        self.downloads.lock().unwrap().insert(
            url.to_string(),
            Ok(RawResponse {
                status,
                body: body.to_string(),
            }),
        );
        self
    }

    pub fn download_fail(self, url: &str, msg: &str) -> Self {
        self.downloads
            .lock()
            .unwrap()
            .insert(url.to_string(), Err(msg.to_string()));
        self
    }

    pub fn call_count(&self, endpoint: &impl Endpoint) -> usize {
        let key = format!("{} {}", endpoint.method(), endpoint.endpoint());
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| **c == key)
            .count()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, method: &str, target: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{} {}", method, target));
    }
}

#[async_trait::async_trait]
impl AsyncClient for MockJenkinsClient {
    async fn request(
        &self,
        method: &str,
        endpoint: &str,
        _params: Option<&[(&str, &str)]>,
    ) -> Result<String, JenkinsError> {
        self.record(method, endpoint);

        let mut responses = self.responses.lock().unwrap();
        let queue = responses.get_mut(endpoint).ok_or_else(|| {
            JenkinsError::RequestError(format!("no mock response for {}", endpoint))
        })?;
        let response = if queue.len() > 1 {
            queue.pop_front().unwrap()
        } else {
            queue.front().cloned().unwrap()
        };

        response.map_err(JenkinsError::RequestError)
    }
}

#[async_trait::async_trait]
impl VerifierClient for MockJenkinsClient {
    fn base_url(&self) -> &str {
        &self.url
    }

    async fn request_location(
        &self,
        method: &str,
        endpoint: &str,
    ) -> Result<Option<String>, JenkinsError> {
        self.record(method, endpoint);

        match self.location.lock().unwrap().clone() {
            Some(result) => result.map_err(JenkinsError::RequestError),
            None => Err(JenkinsError::RequestError(format!(
                "no mock location for {}",
                endpoint
            ))),
        }
    }

    async fn download(&self, url: &str) -> Result<RawResponse, JenkinsError> {
        self.record("GET", url);

        match self.downloads.lock().unwrap().get(url).cloned() {
            Some(result) => result.map_err(JenkinsError::RequestError),
            None => Ok(RawResponse {
                status: 404,
                body: "Not Found".to_string(),
            }),
        }
    }
}
