use serde::{Deserialize, Serialize};

/// National Grid carbon intensity index bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CarbonIndex {
    VeryLow,
    Low,
    #[default]
    Moderate,
    High,
    VeryHigh,
}

impl CarbonIndex {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarbonIndex::VeryLow => "very low",
            CarbonIndex::Low => "low",
            CarbonIndex::Moderate => "moderate",
            CarbonIndex::High => "high",
            CarbonIndex::VeryHigh => "very high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "very low" => Some(CarbonIndex::VeryLow),
            "low" => Some(CarbonIndex::Low),
            "moderate" => Some(CarbonIndex::Moderate),
            "high" => Some(CarbonIndex::High),
            "very high" => Some(CarbonIndex::VeryHigh),
            _ => None,
        }
    }
}

impl std::fmt::Display for CarbonIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelCategory {
    Renewable,
    Fossil,
    Nuclear,
    Other,
}

impl FuelCategory {
    /// National Grid generation-mix fuel names.
    pub fn for_fuel(fuel: &str) -> Self {
        match fuel.to_lowercase().as_str() {
            "wind" | "solar" | "hydro" | "biomass" => FuelCategory::Renewable,
            "gas" | "coal" => FuelCategory::Fossil,
            "nuclear" => FuelCategory::Nuclear,
            _ => FuelCategory::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelShare {
    pub fuel: String,
    pub percent: f64,
    pub category: FuelCategory,
}

/// Live generation mix, only meaningful for today.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSnapshot {
    /// gCO2/kWh; 0 when the intensity endpoint had no reading.
    pub carbon_intensity: f64,
    pub carbon_index: CarbonIndex,
    pub renewable_percent: f64,
    pub fossil_percent: f64,
    pub nuclear_percent: f64,
    pub other_percent: f64,
    pub fuel_breakdown: Vec<FuelShare>,
}

impl GridSnapshot {
    /// Build a snapshot from a raw (fuel, percent) mix, categorizing fuels and
    /// rounding the group shares to 0.1.
    pub fn from_fuel_mix(carbon_intensity: f64, carbon_index: CarbonIndex, mix: &[(String, f64)]) -> Self {
        let mut renewable = 0.0;
        let mut fossil = 0.0;
        let mut nuclear = 0.0;
        let mut other = 0.0;

        let fuel_breakdown: Vec<FuelShare> = mix
            .iter()
            .map(|(fuel, percent)| {
                let category = FuelCategory::for_fuel(fuel);
                match category {
                    FuelCategory::Renewable => renewable += percent,
                    FuelCategory::Fossil => fossil += percent,
                    FuelCategory::Nuclear => nuclear += percent,
                    FuelCategory::Other => other += percent,
                }
                FuelShare {
                    fuel: fuel.clone(),
                    percent: round_tenth(*percent),
                    category,
                }
            })
            .collect();

        Self {
            carbon_intensity,
            carbon_index,
            renewable_percent: round_tenth(renewable),
            fossil_percent: round_tenth(fossil),
            nuclear_percent: round_tenth(nuclear),
            other_percent: round_tenth(other),
            fuel_breakdown,
        }
    }
}

fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuel_categorization() {
        assert_eq!(FuelCategory::for_fuel("wind"), FuelCategory::Renewable);
        assert_eq!(FuelCategory::for_fuel("Solar"), FuelCategory::Renewable);
        assert_eq!(FuelCategory::for_fuel("biomass"), FuelCategory::Renewable);
        assert_eq!(FuelCategory::for_fuel("gas"), FuelCategory::Fossil);
        assert_eq!(FuelCategory::for_fuel("coal"), FuelCategory::Fossil);
        assert_eq!(FuelCategory::for_fuel("nuclear"), FuelCategory::Nuclear);
        assert_eq!(FuelCategory::for_fuel("imports"), FuelCategory::Other);
        assert_eq!(FuelCategory::for_fuel("storage"), FuelCategory::Other);
    }

    #[test]
    fn snapshot_from_fuel_mix_groups_and_rounds() {
        let mix = vec![
            ("wind".to_string(), 35.24),
            ("solar".to_string(), 12.11),
            ("gas".to_string(), 30.05),
            ("nuclear".to_string(), 15.0),
            ("imports".to_string(), 7.6),
        ];
        let snap = GridSnapshot::from_fuel_mix(120.0, CarbonIndex::Low, &mix);
        assert_eq!(snap.renewable_percent, 47.4);
        assert_eq!(snap.fossil_percent, 30.1);
        assert_eq!(snap.nuclear_percent, 15.0);
        assert_eq!(snap.other_percent, 7.6);
        assert_eq!(snap.fuel_breakdown.len(), 5);
    }

    #[test]
    fn carbon_index_round_trip() {
        for index in [
            CarbonIndex::VeryLow,
            CarbonIndex::Low,
            CarbonIndex::Moderate,
            CarbonIndex::High,
            CarbonIndex::VeryHigh,
        ] {
            assert_eq!(CarbonIndex::from_str(index.as_str()), Some(index));
        }
        assert_eq!(CarbonIndex::from_str("extreme"), None);
    }
}
