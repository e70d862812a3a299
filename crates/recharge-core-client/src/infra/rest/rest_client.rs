// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, warn};
use url::Url;

use super::RestApiConfig;

#[derive(thiserror::Error, Debug)]
pub enum RequestError {
    #[error("Request to {endpoint} failed with status {status}.")]
    Status { endpoint: String, status: StatusCode },
    #[error("Failed to parse response from {endpoint}: {reason}")]
    UnexpectedBody { endpoint: String, reason: String },
    #[error("Base URL {0} cannot be used to build endpoint URLs.")]
    InvalidBaseUrl(Url),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl RequestError {
    /// Timeouts, refused connections and server errors are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Status { status, .. } => status.is_server_error(),
            Self::Transport(err) => err.is_timeout() || err.is_connect(),
            Self::UnexpectedBody { .. } | Self::InvalidBaseUrl(_) => false,
        }
    }
}

/// A thin JSON-over-HTTP client bound to a base URL.
pub struct RestClient {
    http: reqwest::Client,
    config: RestApiConfig,
}

impl RestClient {
    pub fn new(config: RestApiConfig) -> Result<Self, RequestError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    /// Sends a GET request and decodes the JSON response. Retryable failures are repeated up to
    /// `RestApiConfig::read_retries` times.
    pub async fn get<T>(&self, path: &[&str], query: &[(&str, String)]) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(path)?;
        let mut attempt = 0;

        loop {
            let result = self
                .send(self.http.get(url.clone()).query(query), &url)
                .await;

            let response = match result {
                Ok(response) => response,
                Err(err) if err.is_retryable() && attempt < self.config.read_retries => {
                    attempt += 1;
                    warn!(
                        "Retrying {} ({attempt}/{}). Reason: {err}",
                        url.path(),
                        self.config.read_retries
                    );
                    tokio::time::sleep(self.config.retry_delay * attempt).await;
                    continue;
                }
                Err(err) => return Err(err),
            };

            return Self::decode_json(response, &url).await;
        }
    }

    /// Sends a POST request with a JSON body and decodes the JSON response.
    pub async fn post<B, T>(&self, path: &[&str], body: &B) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(path)?;
        let response = self.send(self.http.post(url.clone()).json(body), &url).await?;
        Self::decode_json(response, &url).await
    }

    /// Sends a POST request with a JSON body and returns the raw response body.
    pub async fn post_text<B>(&self, path: &[&str], body: &B) -> Result<String, RequestError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(path)?;
        let response = self.send(self.http.post(url.clone()).json(body), &url).await?;
        Ok(response.text().await?)
    }
}

impl RestClient {
    fn endpoint_url(&self, path: &[&str]) -> Result<Url, RequestError> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RequestError::InvalidBaseUrl(self.config.base_url.clone()))?
            .pop_if_empty()
            .extend(path);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder, url: &Url) -> Result<Response, RequestError> {
        let response = request.send().await.map_err(|err| {
            error!("Request to {} failed: {err}", url.path());
            RequestError::from(err)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Request to {} failed with status {status}.", url.path());
            return Err(RequestError::Status {
                endpoint: url.path().to_string(),
                status,
            });
        }

        Ok(response)
    }

    async fn decode_json<T: DeserializeOwned>(
        response: Response,
        url: &Url,
    ) -> Result<T, RequestError> {
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|err| {
            error!("Failed to parse response from {}: {err}", url.path());
            RequestError::UnexpectedBody {
                endpoint: url.path().to_string(),
                reason: err.to_string(),
            }
        })
    }
}
