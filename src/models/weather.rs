use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// One raw hourly forecast sample, timestamped in UK local time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlySample {
    pub timestamp: NaiveDateTime,
    pub temperature_c: f64,
    pub cloud_cover_percent: f64,
    pub rain_probability_percent: f64,
    pub wind_speed_mph: f64,
    pub weather_code: WeatherCode,
    /// Shortwave radiation in W/m². Partial API responses leave this unset.
    pub solar_radiation_wm2: Option<f64>,
    /// Relative humidity %. Partial API responses leave this unset.
    pub relative_humidity_percent: Option<f64>,
}

impl HourlySample {
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Missing radiation reads as 0 W/m².
    pub fn solar_radiation(&self) -> f64 {
        self.solar_radiation_wm2.unwrap_or(0.0)
    }

    /// Missing or out-of-range humidity reads as 50%.
    pub fn humidity(&self) -> f64 {
        match self.relative_humidity_percent {
            Some(h) if (0.0..=100.0).contains(&h) => h,
            _ => 50.0,
        }
    }
}

/// Per-day aggregates delivered alongside the hourly series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyAggregates {
    pub date: NaiveDate,
    pub temp_high_c: f64,
    pub temp_low_c: f64,
    /// UK local time.
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
}

/// WMO weather interpretation codes, grouped the way Open-Meteo reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WeatherCode {
    Clear,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Fog,
    Drizzle,
    RainShowers,
    Rain,
    FreezingRain,
    Snow,
    Thunderstorm,
    #[default]
    Unknown,
}

impl WeatherCode {
    pub fn from_wmo(code: u32) -> Self {
        match code {
            0 => WeatherCode::Clear,
            1 => WeatherCode::MainlyClear,
            2 => WeatherCode::PartlyCloudy,
            3 => WeatherCode::Overcast,
            45 | 48 => WeatherCode::Fog,
            51..=57 => WeatherCode::Drizzle,
            61..=65 => WeatherCode::Rain,
            66 | 67 => WeatherCode::FreezingRain,
            71..=77 | 85 | 86 => WeatherCode::Snow,
            80..=82 => WeatherCode::RainShowers,
            95..=99 => WeatherCode::Thunderstorm,
            _ => WeatherCode::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherCode::Clear => "Clear",
            WeatherCode::MainlyClear => "Mainly clear",
            WeatherCode::PartlyCloudy => "Partly cloudy",
            WeatherCode::Overcast => "Overcast",
            WeatherCode::Fog => "Fog",
            WeatherCode::Drizzle => "Drizzle",
            WeatherCode::RainShowers => "Rain showers",
            WeatherCode::Rain => "Rain",
            WeatherCode::FreezingRain => "Freezing rain",
            WeatherCode::Snow => "Snow",
            WeatherCode::Thunderstorm => "Thunderstorm",
            WeatherCode::Unknown => "Unknown",
        }
    }

    /// Rank used to pick the headline condition for a day. Higher is worse.
    pub fn severity(&self) -> u8 {
        match self {
            WeatherCode::Clear => 0,
            WeatherCode::MainlyClear => 1,
            WeatherCode::PartlyCloudy => 2,
            WeatherCode::Overcast => 3,
            WeatherCode::Fog => 4,
            WeatherCode::Drizzle => 5,
            WeatherCode::RainShowers => 6,
            WeatherCode::Rain => 7,
            WeatherCode::FreezingRain => 8,
            WeatherCode::Snow => 9,
            WeatherCode::Thunderstorm => 10,
            WeatherCode::Unknown => 2,
        }
    }
}

impl std::fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An hour with solar radiation above 200 W/m². Rain-agnostic; feeds
/// solar-generation reasoning, not drying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunnyPeriod {
    pub hour: u32,
    pub temperature_c: f64,
    pub cloud_cover_percent: f64,
    pub solar_radiation_wm2: f64,
}

/// A maximal run of consecutive hours each scoring >= 0.4 for drying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DryingPeriod {
    pub start_hour: u32,
    /// Inclusive.
    pub end_hour: u32,
    pub duration_hours: u32,
    pub avg_score: f64,
    pub avg_temperature_c: f64,
    pub avg_humidity_percent: f64,
}

/// Simplified one-day weather picture consumed by the rule set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub date: NaiveDate,
    pub temp_high: f64,
    pub temp_low: f64,
    pub avg_temp: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_now: Option<f64>,
    pub conditions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions_range: Option<String>,
    pub cloud_cover_percent: f64,
    pub avg_wind_speed_mph: f64,
    pub max_wind_speed_mph: f64,
    /// Daily maximum across hours.
    pub rain_probability_percent: f64,
    pub avg_humidity_percent: f64,
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
    pub sunny_hours: u32,
    /// Always equals the summed duration of `drying_periods`.
    pub drying_hours: u32,
    pub sunny_periods: Vec<SunnyPeriod>,
    pub drying_periods: Vec<DryingPeriod>,
}

impl WeatherSnapshot {
    pub fn is_weekend(&self) -> bool {
        use chrono::Datelike;
        matches!(
            self.date.weekday(),
            chrono::Weekday::Sat | chrono::Weekday::Sun
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn weather_code_from_wmo() {
        assert_eq!(WeatherCode::from_wmo(0), WeatherCode::Clear);
        assert_eq!(WeatherCode::from_wmo(3), WeatherCode::Overcast);
        assert_eq!(WeatherCode::from_wmo(45), WeatherCode::Fog);
        assert_eq!(WeatherCode::from_wmo(53), WeatherCode::Drizzle);
        assert_eq!(WeatherCode::from_wmo(63), WeatherCode::Rain);
        assert_eq!(WeatherCode::from_wmo(80), WeatherCode::RainShowers);
        assert_eq!(WeatherCode::from_wmo(75), WeatherCode::Snow);
        assert_eq!(WeatherCode::from_wmo(95), WeatherCode::Thunderstorm);
        assert_eq!(WeatherCode::from_wmo(1234), WeatherCode::Unknown);
    }

    #[test]
    fn severity_is_monotonic_from_clear_to_storm() {
        assert!(WeatherCode::Clear.severity() < WeatherCode::Overcast.severity());
        assert!(WeatherCode::Overcast.severity() < WeatherCode::Rain.severity());
        assert!(WeatherCode::Rain.severity() < WeatherCode::Thunderstorm.severity());
    }

    #[test]
    fn missing_sample_fields_use_safe_defaults() {
        let sample = HourlySample {
            timestamp: NaiveDate::from_ymd_opt(2026, 3, 14)
                .unwrap()
                .and_hms_opt(13, 0, 0)
                .unwrap(),
            temperature_c: 12.0,
            cloud_cover_percent: 40.0,
            rain_probability_percent: 10.0,
            wind_speed_mph: 9.0,
            weather_code: WeatherCode::PartlyCloudy,
            solar_radiation_wm2: None,
            relative_humidity_percent: Some(-5.0),
        };
        assert_eq!(sample.solar_radiation(), 0.0);
        assert_eq!(sample.humidity(), 50.0);
        assert_eq!(sample.hour(), 13);
    }

    #[test]
    fn weekend_detection_from_snapshot_date() {
        use chrono::Datelike;
        // 2026-08-29 is a Saturday
        let date = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        assert_eq!(date.weekday(), Weekday::Sat);
    }
}
