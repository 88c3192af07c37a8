use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeatingType {
    Gas,
    Electric,
    HeatPump,
    Oil,
    Other,
}

impl HeatingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeatingType::Gas => "gas",
            HeatingType::Electric => "electric",
            HeatingType::HeatPump => "heat-pump",
            HeatingType::Oil => "oil",
            HeatingType::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gas" => Some(HeatingType::Gas),
            "electric" => Some(HeatingType::Electric),
            "heatpump" | "heat-pump" | "heat pump" => Some(HeatingType::HeatPump),
            "oil" => Some(HeatingType::Oil),
            "other" => Some(HeatingType::Other),
            _ => None,
        }
    }

    /// Hot water systems that can physically pair with this heating type.
    /// A combi boiler only exists for gas; heat pumps and oil boilers heat a
    /// cylinder; "other" accepts anything.
    pub fn valid_hot_water_options(&self) -> &'static [HotWaterSystem] {
        match self {
            HeatingType::Gas => &[
                HotWaterSystem::Combi,
                HotWaterSystem::Tank,
                HotWaterSystem::Other,
            ],
            HeatingType::Electric => &[
                HotWaterSystem::Tank,
                HotWaterSystem::Electric,
                HotWaterSystem::Other,
            ],
            HeatingType::HeatPump => &[HotWaterSystem::Tank, HotWaterSystem::Other],
            HeatingType::Oil => &[HotWaterSystem::Tank, HotWaterSystem::Other],
            HeatingType::Other => &[
                HotWaterSystem::Combi,
                HotWaterSystem::Tank,
                HotWaterSystem::Electric,
                HotWaterSystem::Other,
            ],
        }
    }
}

impl std::fmt::Display for HeatingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotWaterSystem {
    Combi,
    Tank,
    Electric,
    Other,
}

impl HotWaterSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            HotWaterSystem::Combi => "combi",
            HotWaterSystem::Tank => "tank",
            HotWaterSystem::Electric => "electric",
            HotWaterSystem::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "combi" => Some(HotWaterSystem::Combi),
            "tank" | "cylinder" => Some(HotWaterSystem::Tank),
            "electric" | "immersion" => Some(HotWaterSystem::Electric),
            "other" => Some(HotWaterSystem::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for HotWaterSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn is_valid_combination(heating: HeatingType, hot_water: HotWaterSystem) -> bool {
    heating.valid_hot_water_options().contains(&hot_water)
}

/// Uppercase and strip spaces, e.g. "sw1a 1aa" -> "SW1A1AA".
pub fn normalize_postcode(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Shape check against the normalized form (outward + inward code).
pub fn is_valid_postcode(normalized: &str) -> bool {
    let re = regex_lite::Regex::new(r"^[A-Z]{1,2}[0-9][A-Z0-9]?[0-9][A-Z]{2}$").unwrap();
    re.is_match(normalized)
}

pub const MIN_PREFERRED_TEMPERATURE: f64 = 15.0;
pub const MAX_PREFERRED_TEMPERATURE: f64 = 25.0;
pub const DEFAULT_PREFERRED_TEMPERATURE: f64 = 19.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Normalized UK postcode (uppercase, no spaces).
    pub postcode: String,
    pub has_garden: bool,
    pub has_ev: bool,
    pub has_solar: bool,
    pub has_time_of_use_tariff: bool,
    /// Thermostat set point in °C, 15-25.
    pub preferred_temperature: f64,
    pub heating_type: HeatingType,
    pub hot_water_system: HotWaterSystem,
}

impl UserPreferences {
    pub fn new(postcode: &str) -> Self {
        Self {
            postcode: normalize_postcode(postcode),
            ..Default::default()
        }
    }

    pub fn with_preferred_temperature(mut self, temp: f64) -> Self {
        self.preferred_temperature = temp.clamp(MIN_PREFERRED_TEMPERATURE, MAX_PREFERRED_TEMPERATURE);
        self
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            postcode: String::new(),
            has_garden: false,
            has_ev: false,
            has_solar: false,
            has_time_of_use_tariff: false,
            preferred_temperature: DEFAULT_PREFERRED_TEMPERATURE,
            heating_type: HeatingType::Gas,
            hot_water_system: HotWaterSystem::Combi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heating_type_from_str_valid() {
        assert_eq!(HeatingType::from_str("gas"), Some(HeatingType::Gas));
        assert_eq!(HeatingType::from_str("heat-pump"), Some(HeatingType::HeatPump));
        assert_eq!(HeatingType::from_str("Heat Pump"), Some(HeatingType::HeatPump));
        assert_eq!(HeatingType::from_str("OIL"), Some(HeatingType::Oil));
    }

    #[test]
    fn heating_type_from_str_invalid() {
        assert_eq!(HeatingType::from_str("coal"), None);
        assert_eq!(HeatingType::from_str(""), None);
    }

    #[test]
    fn oil_combi_is_invalid() {
        assert!(!is_valid_combination(HeatingType::Oil, HotWaterSystem::Combi));
        assert!(is_valid_combination(HeatingType::Oil, HotWaterSystem::Tank));
    }

    #[test]
    fn heat_pump_options_are_tank_and_other() {
        assert_eq!(
            HeatingType::HeatPump.valid_hot_water_options(),
            &[HotWaterSystem::Tank, HotWaterSystem::Other]
        );
    }

    #[test]
    fn other_heating_accepts_all_hot_water_systems() {
        for hw in [
            HotWaterSystem::Combi,
            HotWaterSystem::Tank,
            HotWaterSystem::Electric,
            HotWaterSystem::Other,
        ] {
            assert!(is_valid_combination(HeatingType::Other, hw));
        }
    }

    #[test]
    fn gas_rejects_immersion_only_systems() {
        assert!(is_valid_combination(HeatingType::Gas, HotWaterSystem::Combi));
        assert!(!is_valid_combination(HeatingType::Gas, HotWaterSystem::Electric));
    }

    #[test]
    fn postcode_normalization() {
        assert_eq!(normalize_postcode("sw1a 1aa"), "SW1A1AA");
        assert_eq!(normalize_postcode("  m1  1ae "), "M11AE");
    }

    #[test]
    fn postcode_validation() {
        assert!(is_valid_postcode("SW1A1AA"));
        assert!(is_valid_postcode("M11AE"));
        assert!(is_valid_postcode("EH165BB"));
        assert!(!is_valid_postcode("NOTAPOSTCODE"));
        assert!(!is_valid_postcode(""));
        assert!(!is_valid_postcode("12345"));
    }

    #[test]
    fn preferred_temperature_clamped() {
        let prefs = UserPreferences::new("SW1A 1AA").with_preferred_temperature(30.0);
        assert_eq!(prefs.preferred_temperature, MAX_PREFERRED_TEMPERATURE);
        let prefs = UserPreferences::new("SW1A 1AA").with_preferred_temperature(10.0);
        assert_eq!(prefs.preferred_temperature, MIN_PREFERRED_TEMPERATURE);
    }

    #[test]
    fn defaults() {
        let prefs = UserPreferences::default();
        assert_eq!(prefs.preferred_temperature, 19.0);
        assert_eq!(prefs.heating_type, HeatingType::Gas);
        assert_eq!(prefs.hot_water_system, HotWaterSystem::Combi);
        assert!(!prefs.has_garden);
    }
}
