use super::{Rule, RuleContext};
use crate::models::{Category, HotWaterSystem, Priority, Recommendation};

/// Batch hot water rule - cold day + cheap window = heat water once
///
/// Conditions:
/// - Average temperature below 12°C
/// - Household is on a time-of-use tariff
pub struct BatchHotWaterRule;

impl Rule for BatchHotWaterRule {
    fn id(&self) -> &'static str {
        "batch-hot-water"
    }

    fn name(&self) -> &'static str {
        "Heat water in the cheap window"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        let w = ctx.weather;
        if !(w.avg_temp < 12.0 && ctx.prefs.has_time_of_use_tariff) {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                Category::Heating,
                Priority::High,
                "Batch-heat your hot water off-peak",
                format!(
                    "Cold day ahead ({:.0}°C average) means more hot water use. Heat the lot during your off-peak window and it stays warm for the day.",
                    w.avg_temp
                ),
            )
            .with_reasoning("Water heated off-peak can cost under half the daytime rate")
            .with_savings("£0.50-£1 per day")
            .personalised(),
        )
    }
}

/// Efficient hot water rule - the no-tariff version of the same cold-day push
///
/// Conditions:
/// - Average temperature below 12°C
/// - No time-of-use tariff
pub struct EfficientHotWaterRule;

impl Rule for EfficientHotWaterRule {
    fn id(&self) -> &'static str {
        "efficient-hot-water"
    }

    fn name(&self) -> &'static str {
        "Trim hot water waste"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        let w = ctx.weather;
        if !(w.avg_temp < 12.0 && !ctx.prefs.has_time_of_use_tariff) {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                Category::Heating,
                Priority::Medium,
                "Use hot water deliberately today",
                format!(
                    "Cold weather ({:.0}°C average) pushes hot water use up. Shorter showers and a 60°C cylinder setting keep the extra cost down.",
                    w.avg_temp
                ),
            )
            .with_reasoning("Hot water demand climbs on cold days; small habits offset it")
            .personalised(),
        )
    }
}

/// Mild-night tank rule - a warm night means the overnight heat keeps
///
/// Conditions:
/// - Hot water system is a tank, on a time-of-use tariff
/// - Overnight low above 10°C
pub struct TankMildNightRule;

impl Rule for TankMildNightRule {
    fn id(&self) -> &'static str {
        "tank-mild-night"
    }

    fn name(&self) -> &'static str {
        "Overnight tank heat, mild night"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        let w = ctx.weather;
        if !(ctx.prefs.hot_water_system == HotWaterSystem::Tank
            && ctx.prefs.has_time_of_use_tariff
            && w.temp_low > 10.0)
        {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                Category::Heating,
                Priority::Medium,
                "Heat the tank overnight",
                format!(
                    "A mild night ({:.0}°C low) means the cylinder loses little heat before morning. Time it to finish at the end of your off-peak window.",
                    w.temp_low
                ),
            )
            .with_reasoning(format!(
                "Standing losses are small at a {:.0}°C overnight low",
                w.temp_low
            ))
            .personalised(),
        )
    }
}

/// Cold-night tank rule - heat late so the morning water is still hot
///
/// Conditions:
/// - Hot water system is a tank, on a time-of-use tariff
/// - Overnight low below 5°C
pub struct TankColdNightRule;

impl Rule for TankColdNightRule {
    fn id(&self) -> &'static str {
        "tank-cold-night"
    }

    fn name(&self) -> &'static str {
        "Overnight tank heat, cold night"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        let w = ctx.weather;
        if !(ctx.prefs.hot_water_system == HotWaterSystem::Tank
            && ctx.prefs.has_time_of_use_tariff
            && w.temp_low < 5.0)
        {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                Category::Heating,
                Priority::Medium,
                "Push tank heating to the end of the cheap window",
                format!(
                    "A cold night ({:.0}°C low) drains cylinder heat faster. Schedule the heat-up for the last off-peak hours so it finishes just before you wake.",
                    w.temp_low
                ),
            )
            .with_reasoning(format!(
                "Standing losses are high at a {:.0}°C overnight low; late heating keeps the morning water hot",
                w.temp_low
            ))
            .personalised(),
        )
    }
}
