use super::{Rule, RuleContext};
use crate::models::{Category, Priority, Recommendation};

/// Off-peak appliances rule - the evergreen tariff tip
///
/// Conditions:
/// - Household is on a time-of-use tariff
pub struct OffPeakAppliancesRule;

impl Rule for OffPeakAppliancesRule {
    fn id(&self) -> &'static str {
        "off-peak-appliances"
    }

    fn name(&self) -> &'static str {
        "Run appliances off-peak"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        if !ctx.prefs.has_time_of_use_tariff {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                Category::Appliances,
                Priority::Medium,
                "Delay-start the big appliances",
                "Use the delay timer on the dishwasher and washing machine so they run in your off-peak window instead of the evening peak.",
            )
            .with_reasoning("Each full-load cycle moved off-peak saves most of its running cost")
            .with_savings("£50-£100 per year")
            .personalised(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{context, prefs, weather};

    #[test]
    fn fires_only_with_tariff() {
        let w = weather();
        let mut p = prefs();
        assert!(OffPeakAppliancesRule.evaluate(&context(&w, &p)).is_none());

        p.has_time_of_use_tariff = true;
        let rec = OffPeakAppliancesRule.evaluate(&context(&w, &p)).unwrap();
        assert_eq!(rec.id, "off-peak-appliances");
        assert_eq!(rec.priority, Priority::Medium);
        assert!(rec.is_personalised);
    }
}
