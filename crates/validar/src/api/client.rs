//! HTTP client for the product API.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::result::{Error, ValidarResult};
use crate::Settings;

/// Response of the server status endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ServerStatus {
    /// Reported product version
    pub version: String,
    /// Reported API version
    #[serde(default)]
    pub api_version: Option<u32>,
}

/// JSON-over-HTTP client with basic auth against the server under test
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl Client {
    /// Build a client from suite settings.
    ///
    /// Self-signed deployments are the norm, so certificate
    /// verification follows `settings.verify_tls`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(settings: &Settings) -> ValidarResult<Self> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(!settings.verify_tls)
            .timeout(Duration::from_secs(120))
            .build()?;
        Ok(Self {
            http,
            base_url: settings.server_url.trim_end_matches('/').to_string(),
            username: settings.username.clone(),
            password: settings.password.clone(),
        })
    }

    /// The base URL requests are issued against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn dispatch(&self, request: reqwest::RequestBuilder) -> ValidarResult<Value> {
        let response = request
            .basic_auth(&self.username, Some(&self.password))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            debug!(status = status.as_u16(), "API request failed");
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// GET a path
    pub async fn get(&self, path: &str) -> ValidarResult<Value> {
        self.dispatch(self.http.get(self.url(path))).await
    }

    /// GET a path with query parameters
    pub async fn get_with_query(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ValidarResult<Value> {
        self.dispatch(self.http.get(self.url(path)).query(query))
            .await
    }

    /// POST a JSON body to a path
    pub async fn post(&self, path: &str, body: &Value) -> ValidarResult<Value> {
        self.dispatch(self.http.post(self.url(path)).json(body))
            .await
    }

    /// PUT a JSON body to a path
    pub async fn put(&self, path: &str, body: &Value) -> ValidarResult<Value> {
        self.dispatch(self.http.put(self.url(path)).json(body)).await
    }

    /// DELETE a path. Asynchronous deletes answer with a task payload.
    pub async fn delete(&self, path: &str) -> ValidarResult<Value> {
        self.dispatch(self.http.delete(self.url(path))).await
    }

    /// Probe the server status endpoint
    pub async fn status(&self) -> ValidarResult<ServerStatus> {
        let value = self.get("api/v2/status").await?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Pull the `results` array out of a search/listing response.
///
/// # Errors
///
/// Returns a JSON error if the results do not deserialize into `T`.
pub(crate) fn results<T: serde::de::DeserializeOwned>(value: &Value) -> ValidarResult<Vec<T>> {
    let results = value
        .get("results")
        .cloned()
        .unwrap_or_else(|| Value::Array(Vec::new()));
    Ok(serde_json::from_value(results)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_from_settings() {
        let settings = Settings::new().with_server_url("https://forja.test/");
        let client = Client::new(&settings).unwrap();
        assert_eq!(client.base_url(), "https://forja.test");
        assert_eq!(
            client.url("/api/v2/environments"),
            "https://forja.test/api/v2/environments"
        );
    }

    #[test]
    fn test_server_status_parses() {
        let value = json!({"version": "6.1.0", "api_version": 2});
        let status: ServerStatus = serde_json::from_value(value).unwrap();
        assert_eq!(status.version, "6.1.0");
        assert_eq!(status.api_version, Some(2));
    }

    #[test]
    fn test_results_extracts_array() {
        let value = json!({"total": 2, "results": [{"id": 1}, {"id": 7}]});
        #[derive(serde::Deserialize)]
        struct Row {
            id: u64,
        }
        let rows: Vec<Row> = results(&value).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].id, 7);
    }

    #[test]
    fn test_results_missing_is_empty() {
        let value = json!({"total": 0});
        let rows: Vec<Value> = results(&value).unwrap();
        assert!(rows.is_empty());
    }
}
