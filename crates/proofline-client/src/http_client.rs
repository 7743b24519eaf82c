//! reqwest-based correction service client
//!
//! Direct implementation of the `CorrectionService` trait over HTTP with
//! JSON bodies (and a multipart body for file uploads).

use crate::client::CorrectionService;
use crate::error::ClientError;
use crate::types::{
    AddWordRequest, AddWordResponse, CorrectRequest, CorrectionReport, FileCorrection,
    FileCorrectionResponse,
};
use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

const CORRECT_PATH: &str = "/api/correct";
const ADD_WORD_PATH: &str = "/api/add_word";
const CORRECT_FILE_PATH: &str = "/api/correct_file";

/// HTTP client for the correction service
#[derive(Debug, Clone)]
pub struct HttpCorrectionClient {
    http: Client,
    base_url: String,
}

impl HttpCorrectionClient {
    /// Create a client for the service at `base_url` (e.g. `http://127.0.0.1:5000`)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client reusing an existing reqwest client
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Check the status code and decode the JSON body
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Service(format!(
            "Service responded with {}",
            status
        )));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

#[async_trait]
impl CorrectionService for HttpCorrectionClient {
    async fn correct(&self, text: &str) -> Result<CorrectionReport, ClientError> {
        debug!("Requesting correction for {} chars", text.len());

        let response = self
            .http
            .post(self.endpoint(CORRECT_PATH))
            .json(&CorrectRequest { text })
            .send()
            .await?;
        let report: CorrectionReport = decode(response).await?;

        debug!(
            "Correction received: {} suggestions",
            report.suggestions.len()
        );
        Ok(report)
    }

    async fn add_word(&self, word: &str) -> Result<String, ClientError> {
        debug!("Adding '{}' to dictionary", word);

        let response = self
            .http
            .post(self.endpoint(ADD_WORD_PATH))
            .json(&AddWordRequest { word })
            .send()
            .await?;
        let body: AddWordResponse = decode(response).await?;
        body.into_result(word)
    }

    async fn correct_file(
        &self,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<FileCorrection, ClientError> {
        debug!("Uploading {} ({} bytes)", file_name, content.len());

        let part = Part::bytes(content)
            .file_name(file_name.to_string())
            .mime_str("text/plain")?;
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(self.endpoint(CORRECT_FILE_PATH))
            .multipart(form)
            .send()
            .await?;
        let body: FileCorrectionResponse = decode(response).await?;
        body.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = HttpCorrectionClient::with_client(Client::new(), "http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(
            client.endpoint(CORRECT_PATH),
            "http://localhost:5000/api/correct"
        );
        assert_eq!(
            client.endpoint(CORRECT_FILE_PATH),
            "http://localhost:5000/api/correct_file"
        );
    }

    #[tokio::test]
    async fn test_unreachable_service_is_network_error() {
        // Port 9 (discard) on localhost is not expected to serve HTTP.
        let client =
            HttpCorrectionClient::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
        let err = client.correct("hello").await.unwrap_err();
        assert!(err.is_network(), "unexpected error: {err:?}");
    }
}
