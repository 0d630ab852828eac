//! HTTP client for the genesis daemon

use crate::error::{CliError, CliResult};
use genesis_contact::HttpTransport;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;

/// HTTP client for communicating with the genesis daemon
pub struct GenesisClient {
    client: Client,
    base_url: String,
}

/// Daemon health response
#[derive(Debug, Deserialize, Serialize)]
pub struct DaemonStatus {
    pub status: String,
    /// Daemon version
    pub version: String,
    /// Uptime string
    pub uptime: String,
}

impl GenesisClient {
    /// Create a new client for `endpoint`
    pub fn new(endpoint: &str) -> CliResult<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            base_url: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check daemon health
    pub async fn health_check(&self) -> CliResult<DaemonStatus> {
        self.get("/api/health").await
    }

    /// Transport for contact submissions against the same daemon
    pub fn contact_transport(&self, timeout: Duration) -> CliResult<HttpTransport> {
        Ok(HttpTransport::new(&self.base_url, timeout)?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> CliResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> CliResult<T> {
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(CliError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GenesisClient::new("http://localhost:8080").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_endpoint_normalization() {
        let client = GenesisClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");

        let transport = client.contact_transport(Duration::from_secs(1)).unwrap();
        assert_eq!(transport.endpoint(), "http://localhost:8080/api/contact");
    }
}
