pub mod clock;
pub mod rules;
pub mod selection;
pub mod solar;
pub mod thermostat;
pub mod time_status;
pub mod weather_features;

pub use clock::{Clock, FixedClock, SystemClock};
pub use rules::{DayContext, DayLabel, RuleContext, RulesEngine};
pub use weather_features::extract_weather_snapshot;

use crate::models::{GridSnapshot, Recommendation, UserPreferences, WeatherSnapshot};

/// Run the whole pipeline for one forecast day: evaluate every rule, pick a
/// diverse top four, then tag elapsed action windows. Pure given a fixed
/// clock - identical inputs produce identical output.
pub fn generate_recommendations(
    weather: &WeatherSnapshot,
    prefs: &UserPreferences,
    day: DayContext,
    grid: Option<&GridSnapshot>,
    clock: &dyn Clock,
) -> Vec<Recommendation> {
    let ctx = RuleContext {
        weather,
        prefs,
        grid,
        day,
    };
    let fired = RulesEngine::new().evaluate(&ctx);
    tracing::debug!(
        fired = fired.len(),
        day = %day.label,
        "evaluated recommendation catalog"
    );

    let mut selected = selection::select(fired);
    time_status::annotate(&mut selected, weather, day, clock);
    selected
}
