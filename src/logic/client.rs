use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;

use crate::model::Key;

/// Errors from talking to a single device. A failure here never affects
/// the handling of other devices.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("device returned {0}")]
    Status(StatusCode),
}

/// Wire body for the `press_key` endpoint: `{"key":"left"}` etc.
#[derive(Debug, Serialize)]
struct KeyRequest {
    key: Key,
}

/// HTTP client shared by all probes and key-press sends.
#[derive(Clone)]
pub struct DeviceClient {
    http: Client,
}

impl DeviceClient {
    pub fn new(timeout: Duration) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;
        Ok(Self { http })
    }

    /// One health probe: `GET <address>`. Any success status counts as ok;
    /// an error status or transport failure does not.
    pub async fn check_health(&self, address: &str) -> Result<(), ClientError> {
        let response = self.http.get(address).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(ClientError::Status(response.status()))
        }
    }

    /// One key press: `POST <address>/press_key` with a JSON body.
    /// Returns the device's text response on success.
    pub async fn press_key(&self, address: &str, key: Key) -> Result<String, ClientError> {
        let url = format!("{address}/press_key");
        let response = self.http.post(url).json(&KeyRequest { key }).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
