use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::error::{Result, WattWiseError};
use crate::logic::rules::DayLabel;
use crate::models::preferences::{
    is_valid_combination, HeatingType, HotWaterSystem, UserPreferences,
};

#[derive(Parser, Debug)]
#[command(name = "wattwise")]
#[command(about = "Weather-aware energy-saving tips for UK households")]
#[command(version)]
pub struct Cli {
    /// UK postcode to forecast for, e.g. "SW1A 1AA"
    pub postcode: Option<String>,

    /// Which day to generate tips for
    #[arg(long, value_enum, default_value_t = DayArg::Tomorrow)]
    pub day: DayArg,

    /// Household has outdoor drying space
    #[arg(long)]
    pub garden: bool,

    /// Household has an electric vehicle
    #[arg(long)]
    pub ev: bool,

    /// Household has solar panels
    #[arg(long)]
    pub solar: bool,

    /// Household is on a time-of-use electricity tariff
    #[arg(long)]
    pub tou: bool,

    /// Primary heating system
    #[arg(long, value_enum)]
    pub heating: Option<HeatingArg>,

    /// Hot water system
    #[arg(long = "hot-water", value_enum)]
    pub hot_water: Option<HotWaterArg>,

    /// Preferred indoor temperature in celsius
    #[arg(long)]
    pub temp: Option<f64>,

    /// Emit recommendations as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,

    /// Path to config file (defaults to config/config.yaml or XDG config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every rule in the catalog
    Rules,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayArg {
    Today,
    Tomorrow,
}

impl DayArg {
    pub fn label(self) -> DayLabel {
        match self {
            DayArg::Today => DayLabel::Today,
            DayArg::Tomorrow => DayLabel::Tomorrow,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeatingArg {
    Gas,
    Electric,
    HeatPump,
    Oil,
    Other,
}

impl From<HeatingArg> for HeatingType {
    fn from(arg: HeatingArg) -> Self {
        match arg {
            HeatingArg::Gas => HeatingType::Gas,
            HeatingArg::Electric => HeatingType::Electric,
            HeatingArg::HeatPump => HeatingType::HeatPump,
            HeatingArg::Oil => HeatingType::Oil,
            HeatingArg::Other => HeatingType::Other,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HotWaterArg {
    Combi,
    Tank,
    Electric,
    Other,
}

impl From<HotWaterArg> for HotWaterSystem {
    fn from(arg: HotWaterArg) -> Self {
        match arg {
            HotWaterArg::Combi => HotWaterSystem::Combi,
            HotWaterArg::Tank => HotWaterSystem::Tank,
            HotWaterArg::Electric => HotWaterSystem::Electric,
            HotWaterArg::Other => HotWaterSystem::Other,
        }
    }
}

impl Cli {
    /// Build user preferences from the flags, rejecting heating/hot-water
    /// pairs that do not occur together in real installations.
    pub fn preferences(&self) -> Result<UserPreferences> {
        let mut prefs = match &self.postcode {
            Some(postcode) => UserPreferences::new(postcode),
            None => UserPreferences::default(),
        };
        if let Some(heating) = self.heating {
            prefs.heating_type = heating.into();
        }
        if let Some(hot_water) = self.hot_water {
            prefs.hot_water_system = hot_water.into();
        } else if self.heating.is_some() {
            // Pick the first valid option for the chosen heating system so
            // --heating alone never produces an invalid pair.
            prefs.hot_water_system = prefs.heating_type.valid_hot_water_options()[0];
        }
        if let Some(temp) = self.temp {
            prefs = prefs.with_preferred_temperature(temp);
        }

        prefs.has_garden = self.garden;
        prefs.has_ev = self.ev;
        prefs.has_solar = self.solar;
        prefs.has_time_of_use_tariff = self.tou;

        if !is_valid_combination(prefs.heating_type, prefs.hot_water_system) {
            return Err(WattWiseError::Config(format!(
                "{} heating cannot be paired with a {} hot water system",
                prefs.heating_type, prefs.hot_water_system
            )));
        }

        Ok(prefs)
    }
}
