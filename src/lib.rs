pub mod cli;
pub mod config;
pub mod datasources;
pub mod error;
pub mod logic;
pub mod models;

pub use config::Config;
pub use error::{Result, WattWiseError};
pub use logic::{generate_recommendations, Clock, DayContext, DayLabel, RulesEngine, SystemClock};
pub use models::{
    GridSnapshot, Priority, Recommendation, UserPreferences, WeatherSnapshot,
};
