use super::appliances::OffPeakAppliancesRule;
use super::cooking::{AvoidHeatGeneratingRule, HotDayCookingRule, RainyDayCookingRule};
use super::grid::{GridCleanNowRule, GridLowCarbonRule};
use super::heating::{
    ElectricHeatingSolarRule, GasColdPreheatRule, GasMildWeatherRule, GasSolarElectricRule,
    HeatPumpColdWeatherRule, HeatPumpOptimalRule, OilBatchHeatingRule, OilColdWeatherRule,
    OilMildWeatherRule,
};
use super::hot_water::{
    BatchHotWaterRule, EfficientHotWaterRule, TankColdNightRule, TankMildNightRule,
};
use super::insulation::{CurtainsColdRule, CurtainsHotRule, NaturalVentilationRule};
use super::laundry::{IndoorDryRule, LineDryRule};
use super::mobility::{EvOffPeakChargingRule, EvSolarChargingRule};
use super::{Rule, RuleContext};
use crate::models::Recommendation;

/// The full recommendation catalog. Every rule is evaluated on every request;
/// registration order never affects which rules fire, only the later stable
/// sort decides presentation order.
pub struct RulesEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RulesEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            // laundry
            Box::new(LineDryRule),
            Box::new(IndoorDryRule),
            // mobility
            Box::new(EvSolarChargingRule),
            Box::new(EvOffPeakChargingRule),
            // insulation & ventilation
            Box::new(CurtainsColdRule),
            Box::new(CurtainsHotRule),
            Box::new(NaturalVentilationRule),
            // heating
            Box::new(HeatPumpOptimalRule),
            Box::new(HeatPumpColdWeatherRule),
            Box::new(GasMildWeatherRule),
            Box::new(GasColdPreheatRule),
            Box::new(GasSolarElectricRule),
            Box::new(OilMildWeatherRule),
            Box::new(OilColdWeatherRule),
            Box::new(OilBatchHeatingRule),
            Box::new(ElectricHeatingSolarRule),
            // hot water
            Box::new(BatchHotWaterRule),
            Box::new(EfficientHotWaterRule),
            Box::new(TankMildNightRule),
            Box::new(TankColdNightRule),
            // cooking
            Box::new(AvoidHeatGeneratingRule),
            Box::new(HotDayCookingRule),
            Box::new(RainyDayCookingRule),
            // appliances & grid
            Box::new(OffPeakAppliancesRule),
            Box::new(GridCleanNowRule),
            Box::new(GridLowCarbonRule),
        ];

        Self { rules }
    }

    /// Evaluate every rule and collect the ones that fire.
    pub fn evaluate(&self, ctx: &RuleContext) -> Vec<Recommendation> {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(ctx))
            .collect()
    }

    pub fn evaluate_rule(&self, rule_id: &str, ctx: &RuleContext) -> Option<Recommendation> {
        self.rules
            .iter()
            .find(|r| r.id() == rule_id)
            .and_then(|rule| rule.evaluate(ctx))
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{context, prefs, weather};
    use std::collections::HashSet;

    #[test]
    fn catalog_has_unique_ids() {
        let engine = RulesEngine::new();
        let ids: Vec<_> = engine.list_rules().iter().map(|(id, _)| *id).collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(ids.len(), 26);
    }

    #[test]
    fn evaluate_rule_finds_by_id() {
        let engine = RulesEngine::new();
        let mut w = weather();
        w.avg_temp = 10.0;
        let mut p = prefs();
        p.has_time_of_use_tariff = true;

        let rec = engine
            .evaluate_rule("batch-hot-water", &context(&w, &p))
            .unwrap();
        assert_eq!(rec.id, "batch-hot-water");
        assert!(engine.evaluate_rule("no-such-rule", &context(&w, &p)).is_none());
    }

    #[test]
    fn rules_fire_independently() {
        let mut w = weather();
        w.avg_temp = 9.0;
        w.temp_low = 3.0;
        let mut p = prefs();
        p.has_time_of_use_tariff = true;

        let fired = RulesEngine::new().evaluate(&context(&w, &p));
        let ids: HashSet<_> = fired.iter().map(|r| r.id.as_str()).collect();
        assert!(ids.contains("batch-hot-water"));
        assert!(ids.contains("curtains-cold"));
        assert!(ids.contains("off-peak-appliances"));
        assert!(ids.contains("gas-cold-preheat"));
    }
}
