// client crate

use async_trait::async_trait;
use models::ValidationResult;
use reqwest::header::{self, HeaderValue};
use std::fmt;
use thiserror::Error;

/// Public endpoint of the VeriCorp validation API
pub const DEFAULT_BASE_URL: &str = "https://vericorp-api.p.rapidapi.com";

/// Value of the `X-RapidAPI-Host` header expected by the gateway
pub const RAPIDAPI_HOST: &str = "vericorp-api.p.rapidapi.com";

const API_KEY_HEADER: &str = "X-RapidAPI-Key";
const API_HOST_HEADER: &str = "X-RapidAPI-Host";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API returned {status} for {tax_id}")]
    RemoteStatus { status: u16, tax_id: String },

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode API response for {tax_id}: {source}")]
    Decode {
        tax_id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("API key is not a valid header value")]
    InvalidApiKey,
}

/// Anything that can look up a single VAT number.
#[async_trait]
pub trait VatValidator: Send + Sync {
    async fn validate(&self, tax_id: &str) -> Result<ValidationResult, ClientError>;
}

/// Client for the VeriCorp validation API, served through RapidAPI
pub struct VericorpClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl fmt::Debug for VericorpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VericorpClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl VericorpClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: &str) -> Self {
        VericorpClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Replace the underlying HTTP client, e.g. to change proxy settings.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the validation endpoint for one identifier
    pub fn validation_url(&self, tax_id: &str) -> String {
        format!(
            "{}/v1/validate/{}",
            self.base_url,
            urlencoding::encode(tax_id)
        )
    }

    fn api_key_header(&self) -> Result<HeaderValue, ClientError> {
        let mut value =
            HeaderValue::from_str(&self.api_key).map_err(|_| ClientError::InvalidApiKey)?;
        value.set_sensitive(true);
        Ok(value)
    }
}

#[async_trait]
impl VatValidator for VericorpClient {
    async fn validate(&self, tax_id: &str) -> Result<ValidationResult, ClientError> {
        let url = self.validation_url(tax_id);

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, self.api_key_header()?)
            .header(API_HOST_HEADER, RAPIDAPI_HOST)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::RemoteStatus {
                status: response.status().as_u16(),
                tax_id: tax_id.to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ClientError::Decode {
            tax_id: tax_id.to_string(),
            source,
        })
    }
}
