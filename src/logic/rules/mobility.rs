use super::{Rule, RuleContext};
use crate::logic::solar::best_solar_window;
use crate::models::{Category, Impact, Priority, Recommendation};

/// EV solar charging rule - charge from the roof while the sun is out
///
/// Conditions:
/// - Household has an EV and solar panels
/// - At least one sunny period in the forecast
pub struct EvSolarChargingRule;

impl Rule for EvSolarChargingRule {
    fn id(&self) -> &'static str {
        "ev-solar-charging"
    }

    fn name(&self) -> &'static str {
        "Charge the EV from solar"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        if !(ctx.prefs.has_ev && ctx.prefs.has_solar) {
            return None;
        }
        let window = best_solar_window(ctx.weather)?;

        Some(
            Recommendation::new(
                self.id(),
                Category::Mobility,
                Priority::High,
                "Charge your EV on free solar power",
                format!(
                    "Plug the car in between {} - your panels will be at their strongest then, with {} sunny {} forecast.",
                    window.describe(),
                    ctx.weather.sunny_hours,
                    if ctx.weather.sunny_hours == 1 { "hour" } else { "hours" }
                ),
            )
            .with_reasoning(format!(
                "Solar generation peaks around {}",
                window.describe()
            ))
            .with_savings("£2-£5 per charge")
            .with_impact(Impact::High)
            .personalised(),
        )
    }
}

/// EV off-peak charging rule - no panels, but a cheap overnight rate
///
/// Conditions:
/// - Household has an EV, no solar, and a time-of-use tariff
pub struct EvOffPeakChargingRule;

impl Rule for EvOffPeakChargingRule {
    fn id(&self) -> &'static str {
        "ev-offpeak-charging"
    }

    fn name(&self) -> &'static str {
        "Charge the EV off-peak"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        if !(ctx.prefs.has_ev && !ctx.prefs.has_solar && ctx.prefs.has_time_of_use_tariff) {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                Category::Mobility,
                Priority::High,
                "Schedule EV charging for the off-peak window",
                "Set the car to start charging when your cheap overnight rate begins - most tariffs run roughly 12:30am to 4:30am.",
            )
            .with_reasoning("Off-peak electricity can cost a quarter of the daytime rate")
            .with_savings("£3-£8 per charge")
            .with_impact(Impact::High)
            .personalised(),
        )
    }
}
