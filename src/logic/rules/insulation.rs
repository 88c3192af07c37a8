use super::{Rule, RuleContext};
use crate::models::{Category, Impact, Priority, Recommendation};

/// Cold-weather curtains rule - trap heat once the sun is down
///
/// Conditions:
/// - Average temperature below 10°C
/// - Overnight low below 5°C
pub struct CurtainsColdRule;

impl Rule for CurtainsColdRule {
    fn id(&self) -> &'static str {
        "curtains-cold"
    }

    fn name(&self) -> &'static str {
        "Close curtains against the cold"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        let w = ctx.weather;
        if !(w.avg_temp < 10.0 && w.temp_low < 5.0) {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                Category::Insulation,
                Priority::Medium,
                "Close curtains and blinds at dusk",
                format!(
                    "With the temperature dropping to {:.0}°C overnight, closing curtains at sunset keeps noticeably more heat in the room.",
                    w.temp_low
                ),
            )
            .with_reasoning(format!(
                "Cold day (average {:.0}°C) with a {:.0}°C overnight low",
                w.avg_temp, w.temp_low
            ))
            .with_savings("Up to £20/year per room")
            .personalised(),
        )
    }
}

/// Hot-weather curtains rule - keep strong sun out of south-facing rooms
///
/// Conditions:
/// - Average temperature at least 22°C
/// - At least 4 sunny hours
pub struct CurtainsHotRule;

impl Rule for CurtainsHotRule {
    fn id(&self) -> &'static str {
        "curtains-hot"
    }

    fn name(&self) -> &'static str {
        "Shade rooms from strong sun"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        let w = ctx.weather;
        if !(w.avg_temp >= 22.0 && w.sunny_hours >= 4) {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                Category::Insulation,
                Priority::Low,
                "Keep curtains closed on the sunny side",
                format!(
                    "{} hours of strong sun are forecast. Shading south-facing windows during the day keeps rooms cooler without a fan.",
                    w.sunny_hours
                ),
            )
            .with_reasoning(format!(
                "Warm day ({:.0}°C average) with {} sunny hours",
                w.avg_temp, w.sunny_hours
            ))
            .with_impact(Impact::Low)
            .personalised(),
        )
    }
}

/// Natural ventilation rule - the outside air can do the thermostat's job
///
/// Conditions:
/// - Daytime high reaches the preferred temperature
/// - Average temperature below 21°C (not a hot day)
/// - Overnight low stays within 3°C of the preference
pub struct NaturalVentilationRule;

impl Rule for NaturalVentilationRule {
    fn id(&self) -> &'static str {
        "natural-ventilation"
    }

    fn name(&self) -> &'static str {
        "Heat with open windows"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        let w = ctx.weather;
        let preferred = ctx.prefs.preferred_temperature;
        if !(w.temp_high >= preferred && w.avg_temp < 21.0 && w.temp_low > preferred - 3.0) {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                Category::Heating,
                Priority::High,
                "Switch the heating off and open windows",
                format!(
                    "Outdoor temperatures reach {:.0}°C, right at your preferred {:.0}°C. Airing the house in the afternoon should carry you through the day without heating.",
                    w.temp_high, preferred
                ),
            )
            .with_reasoning(format!(
                "High of {:.0}°C meets the {:.0}°C set point and the night only falls to {:.0}°C",
                w.temp_high, preferred, w.temp_low
            ))
            .with_savings("£1-£3 for the day")
            .personalised(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{context, prefs, weather};

    #[test]
    fn curtains_cold_needs_cold_day_and_night() {
        let mut w = weather();
        w.avg_temp = 8.0;
        w.temp_low = 3.0;
        let rec = CurtainsColdRule.evaluate(&context(&w, &prefs())).unwrap();
        assert_eq!(rec.id, "curtains-cold");
        assert_eq!(rec.priority, Priority::Medium);

        w.temp_low = 6.0;
        assert!(CurtainsColdRule.evaluate(&context(&w, &prefs())).is_none());

        // the daytime threshold is strict: exactly 10.0 does not qualify
        w.avg_temp = 10.0;
        w.temp_low = 3.0;
        assert!(CurtainsColdRule.evaluate(&context(&w, &prefs())).is_none());
    }

    #[test]
    fn curtains_hot_needs_heat_and_sun() {
        let mut w = weather();
        w.avg_temp = 23.0;
        w.sunny_hours = 5;
        let rec = CurtainsHotRule.evaluate(&context(&w, &prefs())).unwrap();
        assert_eq!(rec.priority, Priority::Low);

        w.sunny_hours = 3;
        assert!(CurtainsHotRule.evaluate(&context(&w, &prefs())).is_none());
    }

    #[test]
    fn natural_ventilation_band() {
        let mut w = weather();
        w.temp_high = 20.0;
        w.avg_temp = 18.0;
        w.temp_low = 17.0;
        let rec = NaturalVentilationRule
            .evaluate(&context(&w, &prefs()))
            .unwrap();
        assert_eq!(rec.id, "natural-ventilation");
        assert_eq!(rec.priority, Priority::High);

        // too cold overnight
        w.temp_low = 15.0;
        assert!(NaturalVentilationRule
            .evaluate(&context(&w, &prefs()))
            .is_none());

        // genuinely hot day, no heating question at all
        w.temp_low = 18.0;
        w.avg_temp = 22.0;
        assert!(NaturalVentilationRule
            .evaluate(&context(&w, &prefs()))
            .is_none());
    }
}
