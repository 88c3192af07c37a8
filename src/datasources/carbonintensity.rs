use serde::Deserialize;

use crate::error::{Result, WattWiseError};
use crate::models::grid::{CarbonIndex, GridSnapshot};

const API_BASE_URL: &str = "https://api.carbonintensity.org.uk";

pub struct CarbonIntensityClient {
    client: reqwest::Client,
    base_url: String,
}

// National Grid ESO carbon-intensity API response structures
#[derive(Debug, Deserialize)]
struct IntensityResponse {
    data: Vec<IntensityEntry>,
}

#[derive(Debug, Deserialize)]
struct IntensityEntry {
    intensity: IntensityDetail,
}

#[derive(Debug, Deserialize)]
struct IntensityDetail {
    actual: Option<f64>,
    forecast: Option<f64>,
    index: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    data: GenerationEntry,
}

#[derive(Debug, Deserialize)]
struct GenerationEntry {
    generationmix: Vec<FuelMixEntry>,
}

#[derive(Debug, Deserialize)]
struct FuelMixEntry {
    fuel: String,
    perc: f64,
}

impl CarbonIntensityClient {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the live generation mix and current national intensity. Intensity
    /// failures degrade to 0 g/kWh rather than losing the mix.
    pub async fn fetch_snapshot(&self) -> Result<GridSnapshot> {
        let mix = self.fetch_generation_mix().await?;
        let (intensity, index) = match self.fetch_intensity().await {
            Ok(pair) => pair,
            Err(e) => {
                tracing::warn!("Carbon intensity endpoint unavailable: {}", e);
                (0.0, CarbonIndex::Moderate)
            }
        };
        Ok(GridSnapshot::from_fuel_mix(intensity, index, &mix))
    }

    async fn fetch_generation_mix(&self) -> Result<Vec<(String, f64)>> {
        let url = format!("{}/generation", self.base_url);
        let response: GenerationResponse = self.get_json(&url).await?;
        Ok(response
            .data
            .generationmix
            .into_iter()
            .map(|entry| (entry.fuel, entry.perc))
            .collect())
    }

    async fn fetch_intensity(&self) -> Result<(f64, CarbonIndex)> {
        let url = format!("{}/intensity", self.base_url);
        let response: IntensityResponse = self.get_json(&url).await?;
        let entry = response
            .data
            .first()
            .ok_or_else(|| WattWiseError::InvalidData("Empty intensity response".into()))?;

        let value = entry
            .intensity
            .actual
            .or(entry.intensity.forecast)
            .unwrap_or(0.0);
        let index = entry
            .intensity
            .index
            .as_deref()
            .and_then(CarbonIndex::from_str)
            .unwrap_or_default();
        Ok((value, index))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await.map_err(|e| {
            WattWiseError::DataSourceUnavailable(format!("carbonintensity.org.uk: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(WattWiseError::DataSourceUnavailable(format!(
                "carbonintensity.org.uk returned {}",
                response.status()
            )));
        }

        response.json().await.map_err(|e| {
            WattWiseError::DataSourceUnavailable(format!(
                "Failed to parse carbonintensity.org.uk response: {}",
                e
            ))
        })
    }
}

impl Default for CarbonIntensityClient {
    fn default() -> Self {
        Self::new()
    }
}
