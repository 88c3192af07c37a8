pub mod appliances;
pub mod cooking;
pub mod engine;
pub mod grid;
pub mod heating;
pub mod hot_water;
pub mod insulation;
pub mod laundry;
pub mod mobility;

pub use engine::RulesEngine;

use serde::{Deserialize, Serialize};

use crate::models::{GridSnapshot, Recommendation, UserPreferences, WeatherSnapshot};

/// Which forecast day a request is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayLabel {
    Today,
    Tomorrow,
    /// Any later day in a multi-day forecast.
    Later,
}

impl DayLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayLabel::Today => "today",
            DayLabel::Tomorrow => "tomorrow",
            DayLabel::Later => "later",
        }
    }
}

impl std::fmt::Display for DayLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayContext {
    pub is_today: bool,
    pub label: DayLabel,
}

impl DayContext {
    pub fn today() -> Self {
        Self {
            is_today: true,
            label: DayLabel::Today,
        }
    }

    pub fn tomorrow() -> Self {
        Self {
            is_today: false,
            label: DayLabel::Tomorrow,
        }
    }
}

/// Everything a rule may look at. Grid data is live-only and today-only.
pub struct RuleContext<'a> {
    pub weather: &'a WeatherSnapshot,
    pub prefs: &'a UserPreferences,
    pub grid: Option<&'a GridSnapshot>,
    pub day: DayContext,
}


/// One entry in the recommendation catalog. Rules are independent pure
/// predicates: each either emits nothing or exactly one recommendation with a
/// stable id, and never inspects what other rules produced.
pub trait Rule: Send + Sync {
    /// Stable identifier, unique per rule firing.
    fn id(&self) -> &'static str;

    /// Human-readable name.
    fn name(&self) -> &'static str;

    /// Evaluate against the day's context.
    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation>;
}
