use chrono::NaiveDate;

use crate::logic::clock::Clock;
use crate::models::weather::{
    DailyAggregates, DryingPeriod, HourlySample, SunnyPeriod, WeatherCode, WeatherSnapshot,
};

/// Hours scoring at or above this join a continuous drying window.
pub const DRYING_SCORE_THRESHOLD: f64 = 0.4;

/// Radiation above this counts an hour as sunny.
pub const SUNNY_RADIATION_WM2: f64 = 200.0;

/// Score one hour for outdoor line-drying, in [0, 1].
///
/// Weighted sum of humidity (0.4), solar radiation (0.3), wind (0.15),
/// temperature (0.1) and time of day (0.05). Rain probability above 40%
/// zeroes the hour outright; 20-40% applies a 0.7 penalty.
pub fn drying_score(sample: &HourlySample) -> f64 {
    let rain = sample.rain_probability_percent;
    if rain > 40.0 {
        return 0.0;
    }

    let mut score = 0.0;

    let humidity = sample.humidity();
    score += if humidity < 50.0 {
        0.4
    } else if humidity < 70.0 {
        0.4 - (humidity - 50.0) / 20.0 * 0.2
    } else if humidity < 85.0 {
        0.2 - (humidity - 70.0) / 15.0 * 0.2
    } else {
        0.0
    };

    let solar = sample.solar_radiation();
    score += if solar > 400.0 {
        0.3
    } else if solar >= 200.0 {
        (solar - 200.0) / 200.0 * 0.3
    } else if solar >= 100.0 {
        (solar - 100.0) / 100.0 * 0.15
    } else {
        0.0
    };

    let wind = sample.wind_speed_mph;
    score += if (8.0..=12.0).contains(&wind) {
        0.15
    } else if (5.0..=20.0).contains(&wind) {
        0.10
    } else if wind > 20.0 && wind <= 25.0 {
        0.05
    } else {
        0.0
    };

    let temp = sample.temperature_c;
    score += if temp >= 21.0 {
        0.1
    } else if temp >= 15.0 {
        (temp - 15.0) / 6.0 * 0.1
    } else if temp >= 5.0 {
        (temp - 5.0) / 10.0 * 0.05
    } else {
        0.0
    };

    let hour = sample.hour();
    score += if (12..=17).contains(&hour) {
        let distance = (hour as f64 - 15.0).abs();
        0.05 * (1.0 - distance / 5.0)
    } else if (10..12).contains(&hour) {
        0.03
    } else if (18..=19).contains(&hour) {
        0.02
    } else {
        0.0
    };

    if rain > 20.0 {
        score *= 0.7;
    }

    score.min(1.0)
}

/// One scored hour inside a candidate drying run.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScoredHour {
    pub hour: u32,
    pub score: f64,
    pub temperature_c: f64,
    pub humidity_percent: f64,
}

/// Merge consecutive qualifying hours into drying periods. When
/// `elapsed_before` is set (today requests), hours strictly before it are
/// dropped from each run before the period is finalized; runs emptied by the
/// trim disappear.
pub(crate) fn merge_drying_runs(
    hours: &[ScoredHour],
    elapsed_before: Option<u32>,
) -> Vec<DryingPeriod> {
    let mut periods = Vec::new();
    let mut run: Vec<ScoredHour> = Vec::new();

    for sh in hours {
        if sh.score >= DRYING_SCORE_THRESHOLD {
            run.push(*sh);
        } else if !run.is_empty() {
            if let Some(period) = finalize_run(&run, elapsed_before) {
                periods.push(period);
            }
            run.clear();
        }
    }
    if !run.is_empty() {
        if let Some(period) = finalize_run(&run, elapsed_before) {
            periods.push(period);
        }
    }

    periods
}

fn finalize_run(run: &[ScoredHour], elapsed_before: Option<u32>) -> Option<DryingPeriod> {
    let kept: Vec<&ScoredHour> = match elapsed_before {
        Some(current) => run.iter().filter(|sh| sh.hour >= current).collect(),
        None => run.iter().collect(),
    };
    if kept.is_empty() {
        return None;
    }

    let n = kept.len() as f64;
    Some(DryingPeriod {
        start_hour: kept.first().map(|sh| sh.hour)?,
        end_hour: kept.last().map(|sh| sh.hour)?,
        duration_hours: kept.len() as u32,
        avg_score: kept.iter().map(|sh| sh.score).sum::<f64>() / n,
        avg_temperature_c: kept.iter().map(|sh| sh.temperature_c).sum::<f64>() / n,
        avg_humidity_percent: kept.iter().map(|sh| sh.humidity_percent).sum::<f64>() / n,
    })
}

/// Headline condition label plus an optional "Least / Most" range when the
/// day spans clearly different weather (severity spread >= 2).
fn summarize_conditions(samples: &[HourlySample]) -> (String, Option<String>) {
    let most_severe = samples
        .iter()
        .map(|s| s.weather_code)
        .max_by_key(WeatherCode::severity);
    let least_severe = samples
        .iter()
        .map(|s| s.weather_code)
        .min_by_key(WeatherCode::severity);

    match (least_severe, most_severe) {
        (Some(least), Some(most)) => {
            let range = if most.severity().saturating_sub(least.severity()) >= 2 {
                Some(format!("{} / {}", least.label(), most.label()))
            } else {
                None
            };
            (most.label().to_string(), range)
        }
        _ => (WeatherCode::Unknown.label().to_string(), None),
    }
}

/// Turn one calendar day of raw hourly samples plus its daily aggregates into
/// the snapshot the rule set consumes. For today requests the clock trims
/// already-elapsed hours out of the drying windows and pins `temp_now`.
pub fn extract_weather_snapshot(
    samples: &[HourlySample],
    daily: &DailyAggregates,
    date: NaiveDate,
    is_today: bool,
    clock: &dyn Clock,
) -> WeatherSnapshot {
    let current_hour = is_today.then(|| clock.current_uk_hour());
    let n = samples.len().max(1) as f64;

    let avg_temp = samples.iter().map(|s| s.temperature_c).sum::<f64>() / n;
    let cloud_cover_percent = samples.iter().map(|s| s.cloud_cover_percent).sum::<f64>() / n;
    let avg_humidity_percent = samples.iter().map(|s| s.humidity()).sum::<f64>() / n;
    let avg_wind_speed_mph = samples.iter().map(|s| s.wind_speed_mph).sum::<f64>() / n;
    let max_wind_speed_mph = samples
        .iter()
        .map(|s| s.wind_speed_mph)
        .fold(0.0_f64, f64::max);
    let rain_probability_percent = samples
        .iter()
        .map(|s| s.rain_probability_percent)
        .fold(0.0_f64, f64::max);

    let temp_now = current_hour.and_then(|h| {
        samples
            .iter()
            .find(|s| s.hour() == h)
            .map(|s| s.temperature_c)
    });

    let sunny_periods: Vec<SunnyPeriod> = samples
        .iter()
        .filter(|s| s.solar_radiation() > SUNNY_RADIATION_WM2)
        .map(|s| SunnyPeriod {
            hour: s.hour(),
            temperature_c: s.temperature_c,
            cloud_cover_percent: s.cloud_cover_percent,
            solar_radiation_wm2: s.solar_radiation(),
        })
        .collect();

    let scored: Vec<ScoredHour> = samples
        .iter()
        .map(|s| ScoredHour {
            hour: s.hour(),
            score: drying_score(s),
            temperature_c: s.temperature_c,
            humidity_percent: s.humidity(),
        })
        .collect();
    let drying_periods = merge_drying_runs(&scored, current_hour);
    let drying_hours = drying_periods.iter().map(|p| p.duration_hours).sum();

    let (conditions, conditions_range) = summarize_conditions(samples);

    WeatherSnapshot {
        date,
        temp_high: daily.temp_high_c,
        temp_low: daily.temp_low_c,
        avg_temp,
        temp_now,
        conditions,
        conditions_range,
        cloud_cover_percent,
        avg_wind_speed_mph,
        max_wind_speed_mph,
        rain_probability_percent,
        avg_humidity_percent,
        sunrise: daily.sunrise,
        sunset: daily.sunset,
        sunny_hours: sunny_periods.len() as u32,
        drying_hours,
        sunny_periods,
        drying_periods,
    }
}
