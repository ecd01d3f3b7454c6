//! Geolocation service client.

use reqwest::header::ACCEPT;
use serde_json::{Map, Value};

use super::types::LookupResult;
use crate::config::ACCEPT_JSON;
use crate::error_handling::LookupError;
use crate::output::result_line;

/// Client for the geolocation service.
///
/// Issues one `GET <endpoint>/<address>` per lookup. The caller awaits each lookup
/// before starting the next, and the body is fully read and dropped inside
/// [`LookupClient::lookup`].
#[derive(Debug, Clone)]
pub struct LookupClient {
    client: reqwest::Client,
    endpoint: String,
}

impl LookupClient {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Looks up `address` and decodes the location fields.
    ///
    /// The HTTP status is not checked: the service's error pages for private
    /// ranges are told apart by their body alone.
    ///
    /// # Errors
    ///
    /// See [`LookupError`] for the classification of failures.
    pub async fn lookup(&self, address: &str) -> Result<LookupResult, LookupError> {
        let url = format!("{}/{}", self.endpoint, address);
        log::debug!("GET {}", url);

        let request = self
            .client
            .get(&url)
            .header(ACCEPT, ACCEPT_JSON)
            .build()
            .map_err(|source| LookupError::RequestBuild {
                address: address.to_string(),
                source,
            })?;

        let response =
            self.client
                .execute(request)
                .await
                .map_err(|source| LookupError::Transport {
                    address: address.to_string(),
                    source,
                })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| LookupError::BodyRead {
                address: address.to_string(),
                source,
            })?;
        log::debug!("{} answered {} with {} bytes", address, status, body.len());

        decode_body(address, &body)
    }

    /// Looks up `address` and renders the outcome as a single line.
    pub async fn describe(&self, address: &str) -> String {
        result_line(address, &self.lookup(address).await)
    }
}

/// Decodes a response body.
///
/// A body that cannot be read as a JSON object means a private address. An object
/// lacking one of the string fields is a malformed response, and so is a literal
/// `null`, which decodes as an empty object.
pub fn decode_body(address: &str, body: &[u8]) -> Result<LookupResult, LookupError> {
    let private = || LookupError::PrivateAddress {
        address: address.to_string(),
    };

    let value: Value = serde_json::from_slice(body).map_err(|_| private())?;
    let object = match value {
        Value::Object(object) => object,
        Value::Null => Map::new(),
        _ => return Err(private()),
    };

    serde_json::from_value(Value::Object(object)).map_err(|source| {
        LookupError::MalformedResponse {
            address: address.to_string(),
            source,
        }
    })
}
