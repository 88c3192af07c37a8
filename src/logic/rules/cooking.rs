use super::{Rule, RuleContext};
use crate::models::{Category, Impact, Priority, Recommendation};

/// Warm-day cooking rule - don't heat the house you're trying to keep cool
///
/// Conditions:
/// - Average temperature between 22°C and 26°C
pub struct AvoidHeatGeneratingRule;

impl Rule for AvoidHeatGeneratingRule {
    fn id(&self) -> &'static str {
        "avoid-heat-generating"
    }

    fn name(&self) -> &'static str {
        "Skip oven cooking on warm days"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        let w = ctx.weather;
        if !((22.0..26.0).contains(&w.avg_temp)) {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                Category::Cooking,
                Priority::Low,
                "Keep the oven off",
                format!(
                    "At {:.0}°C, an hour of oven use noticeably warms the kitchen. Hob, microwave or salads keep the house cooler and use less energy.",
                    w.avg_temp
                ),
            )
            .with_reasoning("Oven heat works against keeping the house cool on a warm day")
            .with_impact(Impact::Low),
        )
    }
}

/// Hot-day cooking rule - genuinely hot, cook outdoors or not at all
///
/// Conditions:
/// - Average temperature at least 26°C
pub struct HotDayCookingRule;

impl Rule for HotDayCookingRule {
    fn id(&self) -> &'static str {
        "hot-day-cooking"
    }

    fn name(&self) -> &'static str {
        "No-cook hot day"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        let w = ctx.weather;
        if w.avg_temp < 26.0 {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                Category::Cooking,
                Priority::Low,
                "Cook outside or go cold",
                format!(
                    "It's a hot one ({:.0}°C average). A barbecue or no-cook meal avoids adding oven heat the house will then fight to shed.",
                    w.avg_temp
                ),
            )
            .with_reasoning("Indoor cooking heat on a hot day costs twice: once to make, once to remove")
            .with_impact(Impact::Low),
        )
    }
}

/// Rainy weekend batch-cooking rule - a stuck-indoors day is a batch day
///
/// Conditions:
/// - Weekend (from the forecast date)
/// - Rain probability above 70%
/// - Average temperature below 15°C
pub struct RainyDayCookingRule;

impl Rule for RainyDayCookingRule {
    fn id(&self) -> &'static str {
        "rainy-day-cooking"
    }

    fn name(&self) -> &'static str {
        "Rainy weekend batch cook"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        let w = ctx.weather;
        if !(w.is_weekend() && w.rain_probability_percent > 70.0 && w.avg_temp < 15.0) {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                Category::Cooking,
                Priority::Medium,
                "Batch cook while the oven warms the house",
                format!(
                    "A wet, cold weekend day ({:.0}% rain, {:.0}°C) is perfect for batch cooking - one oven session fills the freezer and the waste heat isn't wasted.",
                    w.rain_probability_percent, w.avg_temp
                ),
            )
            .with_reasoning("One long oven run beats several short ones, and the heat is welcome on a cold day")
            .with_savings("£1-£2 versus cooking each meal separately"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{context, prefs, weather};
    use chrono::NaiveDate;

    #[test]
    fn warm_band_fires_below_twenty_six() {
        let mut w = weather();
        w.avg_temp = 23.0;
        let rec = AvoidHeatGeneratingRule
            .evaluate(&context(&w, &prefs()))
            .unwrap();
        assert_eq!(rec.id, "avoid-heat-generating");
        assert!(!rec.is_personalised);
        assert!(HotDayCookingRule.evaluate(&context(&w, &prefs())).is_none());
    }

    #[test]
    fn hot_band_takes_over_at_twenty_six() {
        let mut w = weather();
        w.avg_temp = 26.0;
        assert!(AvoidHeatGeneratingRule
            .evaluate(&context(&w, &prefs()))
            .is_none());
        let rec = HotDayCookingRule.evaluate(&context(&w, &prefs())).unwrap();
        assert_eq!(rec.id, "hot-day-cooking");
    }

    #[test]
    fn rainy_day_cooking_needs_a_wet_cold_weekend() {
        let mut w = weather();
        w.date = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap(); // Saturday
        w.rain_probability_percent = 80.0;
        w.avg_temp = 10.0;

        let rec = RainyDayCookingRule.evaluate(&context(&w, &prefs())).unwrap();
        assert_eq!(rec.priority, Priority::Medium);

        // same weather on a Wednesday
        w.date = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
        assert!(RainyDayCookingRule.evaluate(&context(&w, &prefs())).is_none());
    }
}
