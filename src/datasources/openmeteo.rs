use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::error::{Result, WattWiseError};
use crate::models::weather::{DailyAggregates, HourlySample, WeatherCode};

const API_BASE_URL: &str = "https://api.open-meteo.com/v1";

/// Raw multi-day forecast, split per calendar day for the feature extractor.
#[derive(Debug, Clone)]
pub struct RawForecast {
    pub days: Vec<ForecastDay>,
}

#[derive(Debug, Clone)]
pub struct ForecastDay {
    pub aggregates: DailyAggregates,
    pub hourly: Vec<HourlySample>,
}

pub struct OpenMeteoClient {
    client: reqwest::Client,
    base_url: String,
}

// Open-Meteo response structures (parallel arrays)
#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    hourly: OpenMeteoHourly,
    daily: OpenMeteoDaily,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoHourly {
    time: Vec<String>,
    temperature_2m: Vec<Option<f64>>,
    cloudcover: Vec<Option<f64>>,
    precipitation_probability: Vec<Option<f64>>,
    windspeed_10m: Vec<Option<f64>>,
    weathercode: Vec<Option<u32>>,
    shortwave_radiation: Vec<Option<f64>>,
    relativehumidity_2m: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoDaily {
    time: Vec<String>,
    temperature_2m_max: Vec<Option<f64>>,
    temperature_2m_min: Vec<Option<f64>>,
    sunrise: Vec<String>,
    sunset: Vec<String>,
}

impl OpenMeteoClient {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch an hourly + daily forecast in UK local time and mph wind units.
    pub async fn fetch_forecast(&self, latitude: f64, longitude: f64, days: u32) -> Result<RawForecast> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&forecast_days={}\
             &hourly=temperature_2m,cloudcover,precipitation_probability,windspeed_10m,weathercode,shortwave_radiation,relativehumidity_2m\
             &daily=temperature_2m_max,temperature_2m_min,sunrise,sunset\
             &windspeed_unit=mph&timezone=Europe%2FLondon",
            self.base_url, latitude, longitude, days
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WattWiseError::DataSourceUnavailable(format!("Open-Meteo: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(WattWiseError::DataSourceUnavailable(format!(
                "Open-Meteo returned {}: {}",
                status, body
            )));
        }

        let payload: OpenMeteoResponse = response.json().await.map_err(|e| {
            WattWiseError::DataSourceUnavailable(format!(
                "Failed to parse Open-Meteo response: {}",
                e
            ))
        })?;

        convert_response(payload)
    }
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}

fn convert_response(payload: OpenMeteoResponse) -> Result<RawForecast> {
    let hourly = convert_hourly(&payload.hourly)?;
    let mut days = Vec::with_capacity(payload.daily.time.len());

    for (i, date_str) in payload.daily.time.iter().enumerate() {
        let date = parse_date(date_str)?;
        let aggregates = DailyAggregates {
            date,
            temp_high_c: payload
                .daily
                .temperature_2m_max
                .get(i)
                .copied()
                .flatten()
                .unwrap_or(0.0),
            temp_low_c: payload
                .daily
                .temperature_2m_min
                .get(i)
                .copied()
                .flatten()
                .unwrap_or(0.0),
            sunrise: parse_datetime(payload.daily.sunrise.get(i).map(String::as_str).unwrap_or(""))?,
            sunset: parse_datetime(payload.daily.sunset.get(i).map(String::as_str).unwrap_or(""))?,
        };
        let day_samples: Vec<HourlySample> = hourly
            .iter()
            .filter(|s| s.timestamp.date() == date)
            .cloned()
            .collect();
        days.push(ForecastDay {
            aggregates,
            hourly: day_samples,
        });
    }

    Ok(RawForecast { days })
}

fn convert_hourly(hourly: &OpenMeteoHourly) -> Result<Vec<HourlySample>> {
    let mut samples = Vec::with_capacity(hourly.time.len());
    for (i, time_str) in hourly.time.iter().enumerate() {
        let get = |v: &Vec<Option<f64>>| v.get(i).copied().flatten();
        samples.push(HourlySample {
            timestamp: parse_datetime(time_str)?,
            temperature_c: get(&hourly.temperature_2m).unwrap_or(0.0),
            cloud_cover_percent: get(&hourly.cloudcover).unwrap_or(0.0),
            rain_probability_percent: get(&hourly.precipitation_probability).unwrap_or(0.0),
            wind_speed_mph: get(&hourly.windspeed_10m).unwrap_or(0.0),
            weather_code: hourly
                .weathercode
                .get(i)
                .copied()
                .flatten()
                .map(WeatherCode::from_wmo)
                .unwrap_or_default(),
            solar_radiation_wm2: get(&hourly.shortwave_radiation),
            relative_humidity_percent: get(&hourly.relativehumidity_2m),
        });
    }
    Ok(samples)
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| WattWiseError::InvalidData(format!("Bad date '{}': {}", s, e)))
}

fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .map_err(|e| WattWiseError::InvalidData(format!("Bad timestamp '{}': {}", s, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_parallel_arrays_into_day_buckets() {
        let payload = OpenMeteoResponse {
            hourly: OpenMeteoHourly {
                time: vec![
                    "2026-03-01T09:00".into(),
                    "2026-03-01T10:00".into(),
                    "2026-03-02T09:00".into(),
                ],
                temperature_2m: vec![Some(8.0), Some(9.5), Some(7.0)],
                cloudcover: vec![Some(80.0), Some(60.0), Some(90.0)],
                precipitation_probability: vec![Some(10.0), None, Some(55.0)],
                windspeed_10m: vec![Some(12.0), Some(14.0), Some(9.0)],
                weathercode: vec![Some(3), Some(2), Some(61)],
                shortwave_radiation: vec![Some(150.0), None, Some(90.0)],
                relativehumidity_2m: vec![Some(70.0), Some(65.0), None],
            },
            daily: OpenMeteoDaily {
                time: vec!["2026-03-01".into(), "2026-03-02".into()],
                temperature_2m_max: vec![Some(11.0), Some(9.0)],
                temperature_2m_min: vec![Some(3.0), Some(2.0)],
                sunrise: vec!["2026-03-01T06:48".into(), "2026-03-02T06:46".into()],
                sunset: vec!["2026-03-01T17:43".into(), "2026-03-02T17:45".into()],
            },
        };

        let forecast = convert_response(payload).unwrap();
        assert_eq!(forecast.days.len(), 2);
        assert_eq!(forecast.days[0].hourly.len(), 2);
        assert_eq!(forecast.days[1].hourly.len(), 1);
        assert_eq!(forecast.days[0].aggregates.temp_high_c, 11.0);

        // missing fields survive as None for the extractor's defaults
        let second = &forecast.days[0].hourly[1];
        assert_eq!(second.solar_radiation_wm2, None);
        assert_eq!(second.rain_probability_percent, 0.0);
        assert_eq!(second.weather_code, WeatherCode::PartlyCloudy);
    }

    #[test]
    fn bad_timestamp_is_an_error() {
        assert!(parse_datetime("yesterday").is_err());
        assert!(parse_date("2026-03-01").is_ok());
    }
}
