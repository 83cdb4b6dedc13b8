// this_file: fontindex/src/source.rs
//
// Remote web fonts listing

use crate::{FontindexError, Result};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// Default base URL of the Google Web Fonts Developer API
pub const DEFAULT_API_URL: &str = "https://www.googleapis.com/webfonts/v1";

/// Anything that can list the complete web fonts catalog
pub trait WebfontSource {
    /// Fetch every catalog record in one request.
    ///
    /// Records are returned undecoded so that a malformed record is reported
    /// by the transformer rather than failing the whole response.
    fn list(&self) -> Result<Vec<Value>>;
}

/// Body of a listing response
#[derive(Debug, Deserialize)]
struct WebfontList {
    items: Option<Vec<Value>>,
}

/// Blocking client for the Google Web Fonts Developer API
pub struct GoogleFontsClient {
    api_key: String,
    api_url: String,
    client: reqwest::blocking::Client,
}

impl GoogleFontsClient {
    /// Create a client against the given API base URL
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| FontindexError::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(api_key, api_url, client))
    }

    /// Create a client that sends requests through an existing HTTP client
    pub fn with_client(
        api_key: impl Into<String>,
        api_url: impl Into<String>,
        client: reqwest::blocking::Client,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: api_url.into(),
            client,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/webfonts", self.api_url.trim_end_matches('/'))
    }
}

impl WebfontSource for GoogleFontsClient {
    fn list(&self) -> Result<Vec<Value>> {
        let endpoint = self.endpoint();
        log::info!("Requesting font list from {}", endpoint);

        let response = self
            .client
            .get(&endpoint)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .map_err(|e| {
                FontindexError::Api(format!("Failed to send list request: {}", e.without_url()))
            })?;

        let status = response.status();
        let body = response.text()?;
        parse_list_response(status, &body)
    }
}

/// Check the status of a listing response and extract its items
pub fn parse_list_response(status: StatusCode, body: &str) -> Result<Vec<Value>> {
    if !status.is_success() {
        return Err(FontindexError::Api(format!(
            "Response status was not successful: {}",
            status
        )));
    }

    let list: WebfontList = serde_json::from_str(body)
        .map_err(|e| FontindexError::Api(format!("Failed to parse list response: {}", e)))?;

    list.items
        .ok_or_else(|| FontindexError::Api("Response items is null!".to_string()))
}
