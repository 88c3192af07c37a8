use super::{DayLabel, Rule, RuleContext};
use crate::models::{Category, Priority, Recommendation};

/// Clean-grid rule - the grid itself is running green right now
///
/// Conditions:
/// - Today's request with live grid data
/// - Renewable share at least 50%
///
/// Priority: high when renewables reach 60%, medium otherwise.
pub struct GridCleanNowRule;

impl Rule for GridCleanNowRule {
    fn id(&self) -> &'static str {
        "grid-clean-now"
    }

    fn name(&self) -> &'static str {
        "Grid is running clean"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        if !(ctx.day.is_today && ctx.day.label == DayLabel::Today) {
            return None;
        }
        let grid = ctx.grid?;
        if grid.renewable_percent < 50.0 {
            return None;
        }

        let priority = if grid.renewable_percent >= 60.0 {
            Priority::High
        } else {
            Priority::Medium
        };

        Some(
            Recommendation::new(
                self.id(),
                Category::Appliances,
                priority,
                "Use electricity now - the grid is green",
                format!(
                    "{:.0}% of grid power is renewable right now. Running the dishwasher, washing or EV charge now uses some of the cleanest electricity of the week.",
                    grid.renewable_percent
                ),
            )
            .with_reasoning(format!(
                "Live generation mix is {:.0}% renewable ({} carbon intensity)",
                grid.renewable_percent, grid.carbon_index
            )),
        )
    }
}

/// Low-carbon grid rule - not windy, but nuclear-heavy and still clean
///
/// Conditions:
/// - Today's request with live grid data
/// - Carbon intensity known and below 150 g/kWh
/// - Renewable share below 50% (otherwise grid-clean-now covers it)
pub struct GridLowCarbonRule;

impl Rule for GridLowCarbonRule {
    fn id(&self) -> &'static str {
        "grid-low-carbon"
    }

    fn name(&self) -> &'static str {
        "Grid carbon is low"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        if !(ctx.day.is_today && ctx.day.label == DayLabel::Today) {
            return None;
        }
        let grid = ctx.grid?;
        if !(grid.carbon_intensity > 0.0
            && grid.carbon_intensity < 150.0
            && grid.renewable_percent < 50.0)
        {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                Category::Appliances,
                Priority::Medium,
                "Good moment for energy-hungry jobs",
                format!(
                    "Grid carbon intensity is low at {:.0}g CO2/kWh. It's a better-than-average time to run heavy appliances.",
                    grid.carbon_intensity
                ),
            )
            .with_reasoning(format!(
                "{:.0}g/kWh is well under the typical UK average",
                grid.carbon_intensity
            )),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{context, context_today, prefs, weather};
    use crate::models::grid::{CarbonIndex, GridSnapshot};

    fn grid(renewable: f64, intensity: f64) -> GridSnapshot {
        GridSnapshot {
            carbon_intensity: intensity,
            carbon_index: CarbonIndex::Low,
            renewable_percent: renewable,
            fossil_percent: 100.0 - renewable,
            nuclear_percent: 0.0,
            other_percent: 0.0,
            fuel_breakdown: Vec::new(),
        }
    }

    #[test]
    fn clean_now_priority_steps_at_sixty() {
        let w = weather();
        let p = prefs();

        let g = grid(65.0, 80.0);
        let rec = GridCleanNowRule
            .evaluate(&context_today(&w, &p, Some(&g)))
            .unwrap();
        assert_eq!(rec.priority, Priority::High);
        assert!(rec.description.contains("65%"));

        let g = grid(55.0, 80.0);
        let rec = GridCleanNowRule
            .evaluate(&context_today(&w, &p, Some(&g)))
            .unwrap();
        assert_eq!(rec.priority, Priority::Medium);

        let g = grid(45.0, 80.0);
        assert!(GridCleanNowRule
            .evaluate(&context_today(&w, &p, Some(&g)))
            .is_none());
    }

    #[test]
    fn grid_rules_are_today_only() {
        let w = weather();
        let p = prefs();
        let g = grid(65.0, 80.0);
        // tomorrow context, even with grid data present
        let mut ctx = context(&w, &p);
        ctx.grid = Some(&g);
        assert!(GridCleanNowRule.evaluate(&ctx).is_none());
        assert!(GridLowCarbonRule.evaluate(&ctx).is_none());
    }

    #[test]
    fn low_carbon_needs_known_intensity_and_modest_renewables() {
        let w = weather();
        let p = prefs();

        let g = grid(30.0, 120.0);
        let rec = GridLowCarbonRule
            .evaluate(&context_today(&w, &p, Some(&g)))
            .unwrap();
        assert_eq!(rec.id, "grid-low-carbon");

        // unknown intensity is reported as 0
        let g = grid(30.0, 0.0);
        assert!(GridLowCarbonRule
            .evaluate(&context_today(&w, &p, Some(&g)))
            .is_none());

        // clean grid defers to grid-clean-now
        let g = grid(55.0, 120.0);
        assert!(GridLowCarbonRule
            .evaluate(&context_today(&w, &p, Some(&g)))
            .is_none());
    }

    #[test]
    fn missing_grid_data_means_silence() {
        let w = weather();
        let p = prefs();
        assert!(GridCleanNowRule
            .evaluate(&context_today(&w, &p, None))
            .is_none());
    }
}
