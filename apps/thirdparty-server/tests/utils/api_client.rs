use std::sync::OnceLock;

use serde_json::Value;

pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| reqwest::ClientBuilder::new().build().unwrap())
}

pub struct Client {
    base_url: String,
}

impl Client {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    pub async fn send(
        &self,
        method: reqwest::Method,
        path: &str,
        headers: &[(&str, &str)],
        body: Option<Value>,
    ) -> reqwest::Response {
        let mut request = http_client().request(method, format!("{}{path}", self.base_url));

        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        request.send().await.unwrap()
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.send(reqwest::Method::GET, path, &[], None).await
    }
}

pub fn fspiop_headers<'a>(source: &'a str, destination: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("FSPIOP-Source", source),
        ("FSPIOP-Destination", destination),
        ("Date", "Thu, 24 Jan 2019 10:22:12 GMT"),
    ]
}
