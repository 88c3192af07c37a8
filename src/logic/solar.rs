use crate::models::weather::{SunnyPeriod, WeatherSnapshot};

/// A 3-hour charging/heating window anchored on the strongest sunny hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarWindow {
    pub start_hour: u32,
    /// Exclusive; the window covers [start_hour, end_hour).
    pub end_hour: u32,
}

impl SolarWindow {
    pub fn describe(&self) -> String {
        format!(
            "{} to {}",
            format_hour_12(self.start_hour),
            format_hour_12(self.end_hour)
        )
    }
}

/// Pick the best 3-hour solar window for the day: prefer the strongest sunny
/// hour inside the midday band [11, 15]; fall back to the global maximum.
pub fn best_solar_window(weather: &WeatherSnapshot) -> Option<SolarWindow> {
    fn strongest<'a>(periods: impl Iterator<Item = &'a SunnyPeriod>) -> Option<&'a SunnyPeriod> {
        periods.max_by(|a, b| {
            a.solar_radiation_wm2
                .partial_cmp(&b.solar_radiation_wm2)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    let midday = strongest(
        weather
            .sunny_periods
            .iter()
            .filter(|p| (11..=15).contains(&p.hour)),
    );
    let best = midday.or_else(|| strongest(weather.sunny_periods.iter()))?;

    Some(SolarWindow {
        start_hour: best.hour,
        end_hour: (best.hour + 3).min(24),
    })
}

/// 12-hour clock label, e.g. 0 -> "12am", 13 -> "1pm", 24 -> "12am".
pub fn format_hour_12(hour: u32) -> String {
    let h = hour % 24;
    match h {
        0 => "12am".to_string(),
        1..=11 => format!("{}am", h),
        12 => "12pm".to_string(),
        _ => format!("{}pm", h - 12),
    }
}
