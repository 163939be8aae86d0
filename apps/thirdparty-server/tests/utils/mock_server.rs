use std::time::Duration;

use serde_json::{Value, json};
use wiremock::http::Method;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

/// Stands in for both the central endpoint directory and the participants'
/// callback servers.
pub struct MockServer {
    mock: wiremock::MockServer,
}

impl MockServer {
    pub async fn new() -> Self {
        let mock = wiremock::MockServer::start().await;
        Self { mock }
    }

    pub fn uri(&self) -> String {
        self.mock.uri()
    }

    /// Registers `endpoint_types` of `participant`, all pointing back at this server.
    pub async fn participant_endpoints(&self, participant: &str, endpoint_types: &[&str]) {
        let endpoints: Vec<Value> = endpoint_types
            .iter()
            .map(|endpoint_type| json!({ "type": endpoint_type, "value": self.uri() }))
            .collect();

        Mock::given(method(Method::GET))
            .and(path(format!("/participants/{participant}/endpoints")))
            .respond_with(ResponseTemplate::new(200).set_body_json(endpoints))
            .mount(&self.mock)
            .await;
    }

    pub async fn callback(&self, http_method: Method, callback_path: &str, status: u16) {
        Mock::given(method(http_method))
            .and(path(callback_path))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.mock)
            .await;
    }

    /// Waits until the adapter's background forward reaches this server.
    pub async fn wait_for_request(
        &self,
        http_method: Method,
        request_path: &str,
    ) -> wiremock::Request {
        for _ in 0..100 {
            if let Some(request) = self.find_request(&http_method, request_path).await {
                return request;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        panic!("no {http_method} {request_path} received");
    }

    pub async fn find_request(
        &self,
        http_method: &Method,
        request_path: &str,
    ) -> Option<wiremock::Request> {
        self.mock
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .find(|request| &request.method == http_method && request.url.path() == request_path)
    }

    pub async fn received_requests(&self, http_method: &Method, request_path: &str) -> usize {
        self.mock
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| &request.method == http_method && request.url.path() == request_path)
            .count()
    }
}

pub fn header<'a>(request: &'a wiremock::Request, name: &str) -> &'a str {
    request
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}
