use serde::Deserialize;

use crate::error::{Result, WattWiseError};
use crate::models::preferences::{is_valid_postcode, normalize_postcode};

const API_BASE_URL: &str = "https://api.postcodes.io";

#[derive(Debug, Clone, Copy)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

pub struct PostcodeClient {
    client: reqwest::Client,
    base_url: String,
}

// postcodes.io response structures
#[derive(Debug, Deserialize)]
struct PostcodeResponse {
    result: PostcodeResult,
}

#[derive(Debug, Deserialize)]
struct PostcodeResult {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl PostcodeClient {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Resolve a UK postcode to coordinates. The postcode is normalized and
    /// shape-checked before any network call.
    pub async fn lookup(&self, postcode: &str) -> Result<Coordinates> {
        let normalized = normalize_postcode(postcode);
        if !is_valid_postcode(&normalized) {
            return Err(WattWiseError::InvalidPostcode(postcode.to_string()));
        }

        let url = format!("{}/postcodes/{}", self.base_url, normalized);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WattWiseError::DataSourceUnavailable(format!("postcodes.io: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(WattWiseError::NotFound(format!(
                "Postcode {} not recognised",
                normalized
            )));
        }
        if !response.status().is_success() {
            return Err(WattWiseError::DataSourceUnavailable(format!(
                "postcodes.io returned {}",
                response.status()
            )));
        }

        let body: PostcodeResponse = response.json().await.map_err(|e| {
            WattWiseError::DataSourceUnavailable(format!(
                "Failed to parse postcodes.io response: {}",
                e
            ))
        })?;

        match (body.result.latitude, body.result.longitude) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates {
                latitude,
                longitude,
            }),
            _ => Err(WattWiseError::InvalidData(format!(
                "Postcode {} has no coordinates",
                normalized
            ))),
        }
    }
}

impl Default for PostcodeClient {
    fn default() -> Self {
        Self::new()
    }
}
