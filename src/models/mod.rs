pub mod grid;
pub mod preferences;
pub mod recommendation;
pub mod weather;

pub use grid::{CarbonIndex, FuelCategory, FuelShare, GridSnapshot};
pub use preferences::{HeatingType, HotWaterSystem, UserPreferences};
pub use recommendation::{Category, Impact, Priority, Recommendation, TimeStatus};
pub use weather::{
    DailyAggregates, DryingPeriod, HourlySample, SunnyPeriod, WeatherCode, WeatherSnapshot,
};
