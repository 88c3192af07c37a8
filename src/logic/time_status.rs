use chrono::Timelike;

use crate::logic::clock::Clock;
use crate::logic::rules::{DayContext, DayLabel};
use crate::logic::solar::best_solar_window;
use crate::models::{Recommendation, TimeStatus, WeatherSnapshot};

/// Tag each selected recommendation as active or passed. Only today requests
/// can have passed items; the action windows are the line-drying afternoon
/// (over two hours before sunset) and the solar charging window. Ordering is
/// left untouched - callers decide how to present passed items.
pub fn annotate(
    recs: &mut [Recommendation],
    weather: &WeatherSnapshot,
    day: DayContext,
    clock: &dyn Clock,
) {
    if day.label != DayLabel::Today {
        for rec in recs.iter_mut() {
            rec.time_status = Some(TimeStatus::Active);
        }
        return;
    }

    let current_hour = clock.current_uk_hour();
    let sunset_hour = weather.sunset.hour();
    let solar_window_end = best_solar_window(weather).map(|w| w.end_hour);

    for rec in recs.iter_mut() {
        let passed = match rec.id.as_str() {
            "line-dry" => current_hour >= sunset_hour.saturating_sub(2),
            "ev-solar-charging" => solar_window_end.is_some_and(|end| current_hour >= end),
            _ => false,
        };
        rec.time_status = Some(if passed {
            TimeStatus::Passed
        } else {
            TimeStatus::Active
        });
    }
}
