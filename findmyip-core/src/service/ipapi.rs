use async_trait::async_trait;
use log::debug;
use reqwest::{Client, header::ACCEPT};

use crate::{IpInfo, NetworkError, service::classify_status};

use super::NetworkService;

const ENDPOINT: &str = "https://ipapi.co/json/";

/// `NetworkService` backed by the public ipapi.co JSON endpoint.
#[derive(Debug, Clone)]
pub struct IpapiService {
    endpoint: String,
    http: Client,
}

impl IpapiService {
    pub fn new() -> Self {
        Self {
            endpoint: ENDPOINT.to_string(),
            http: Client::new(),
        }
    }

    /// Point the service at a different URL. Intended for tests against a
    /// local stand-in server.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }
}

impl Default for IpapiService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NetworkService for IpapiService {
    async fn fetch_ip_info(&self) -> Result<IpInfo, NetworkError> {
        debug!("GET {}", self.endpoint);

        let res = self
            .http
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                let code = e.status().map_or(0, |s| s.as_u16());
                NetworkError::other("transport", code, e.to_string())
            })?;

        let status = res.status();
        debug!("ipapi answered with status {status}");

        if !status.is_success() {
            return Err(classify_status(status));
        }

        let body = res
            .text()
            .await
            .map_err(|e| NetworkError::other("transport", status.as_u16(), e.to_string()))?;

        serde_json::from_str(&body)
            .map_err(|e| NetworkError::other("decode", 0, format!("Failed to parse IP info JSON: {e}")))
    }
}
