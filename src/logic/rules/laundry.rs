use super::{Rule, RuleContext};
use crate::models::{Category, Impact, Priority, Recommendation};

/// Line-drying rule - the flagship tip when the day can actually dry washing
///
/// Conditions:
/// - Household has a garden
/// - At least 3 drying hours forecast
/// - Average wind below 25mph (washing stays on the line)
///
/// Priority ladder:
/// - Exceptional (>=5 drying hours, rain <10%): high
/// - Marginal (3-5 drying hours): medium
/// - Otherwise: high
pub struct LineDryRule;

impl LineDryRule {
    fn fires(ctx: &RuleContext) -> bool {
        ctx.prefs.has_garden
            && ctx.weather.drying_hours >= 3
            && ctx.weather.avg_wind_speed_mph < 25.0
    }
}

impl Rule for LineDryRule {
    fn id(&self) -> &'static str {
        "line-dry"
    }

    fn name(&self) -> &'static str {
        "Line-dry your washing"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        if !Self::fires(ctx) {
            return None;
        }
        let w = ctx.weather;

        let exceptional = w.drying_hours >= 5 && w.rain_probability_percent < 10.0;
        let marginal = w.drying_hours < 5;

        let (priority, title) = if exceptional {
            (Priority::High, "Perfect drying day")
        } else if marginal {
            (Priority::Medium, "Decent drying window")
        } else {
            (Priority::High, "Good day for line-drying")
        };

        let windows = w
            .drying_periods
            .iter()
            .map(|p| {
                format!(
                    "{}:00-{}:00",
                    p.start_hour,
                    (p.end_hour + 1).min(24)
                )
            })
            .collect::<Vec<_>>()
            .join(", ");

        Some(
            Recommendation::new(
                self.id(),
                Category::Laundry,
                priority,
                title,
                format!(
                    "Skip the tumble dryer and hang your washing outside. {} good drying {} forecast ({}).",
                    w.drying_hours,
                    if w.drying_hours == 1 { "hour" } else { "hours" },
                    windows
                ),
            )
            .with_reasoning(format!(
                "{} drying hours with {:.0}% rain risk and {:.0}mph average wind",
                w.drying_hours, w.rain_probability_percent, w.avg_wind_speed_mph
            ))
            .with_savings("£0.50-£1.50 per load")
            .with_impact(Impact::High)
            .personalised(),
        )
    }
}

/// Indoor drying rule - dry air indoors beats the tumble dryer even when the
/// weather outside is no good
///
/// Conditions:
/// - Line-drying conditions do not hold (checked directly, not by rule order)
/// - Average humidity below 50%
/// - Fewer than 3 drying hours
pub struct IndoorDryRule;

impl Rule for IndoorDryRule {
    fn id(&self) -> &'static str {
        "indoor-dry"
    }

    fn name(&self) -> &'static str {
        "Air-dry indoors"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        if LineDryRule::fires(ctx) {
            return None;
        }
        let w = ctx.weather;
        if w.avg_humidity_percent >= 50.0 || w.drying_hours >= 3 {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                Category::Laundry,
                Priority::Medium,
                "Dry laundry on an indoor airer",
                format!(
                    "Outdoor drying is poor {}, but at {:.0}% humidity indoor air is dry enough for a clothes airer near an open window.",
                    ctx.day.label, w.avg_humidity_percent
                ),
            )
            .with_reasoning(format!(
                "Only {} outdoor drying hours, but indoor humidity is low ({:.0}%)",
                w.drying_hours, w.avg_humidity_percent
            ))
            .with_savings("£0.50-£1.50 per load")
            .personalised(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{context, prefs, weather};

    #[test]
    fn line_dry_fires_with_garden_and_drying_hours() {
        let mut w = weather();
        w.drying_hours = 5;
        w.rain_probability_percent = 20.0;
        let mut p = prefs();
        p.has_garden = true;

        let rec = LineDryRule.evaluate(&context(&w, &p)).unwrap();
        assert_eq!(rec.id, "line-dry");
        assert_eq!(rec.priority, Priority::High);
        assert_eq!(rec.title, "Good day for line-drying");
        assert!(rec.is_personalised);
    }

    #[test]
    fn line_dry_exceptional_day() {
        let mut w = weather();
        w.drying_hours = 6;
        w.rain_probability_percent = 5.0;
        let mut p = prefs();
        p.has_garden = true;

        let rec = LineDryRule.evaluate(&context(&w, &p)).unwrap();
        assert_eq!(rec.priority, Priority::High);
        assert_eq!(rec.title, "Perfect drying day");
    }

    #[test]
    fn line_dry_marginal_day_is_medium() {
        let mut w = weather();
        w.drying_hours = 3;
        let mut p = prefs();
        p.has_garden = true;

        let rec = LineDryRule.evaluate(&context(&w, &p)).unwrap();
        assert_eq!(rec.priority, Priority::Medium);
    }

    #[test]
    fn line_dry_needs_garden_and_calm_wind() {
        let mut w = weather();
        w.drying_hours = 6;
        assert!(LineDryRule.evaluate(&context(&w, &prefs())).is_none());

        let mut p = prefs();
        p.has_garden = true;
        w.avg_wind_speed_mph = 26.0;
        assert!(LineDryRule.evaluate(&context(&w, &p)).is_none());
    }

    #[test]
    fn indoor_dry_fires_on_dry_air_without_outdoor_window() {
        let mut w = weather();
        w.drying_hours = 1;
        w.avg_humidity_percent = 45.0;

        let rec = IndoorDryRule.evaluate(&context(&w, &prefs())).unwrap();
        assert_eq!(rec.id, "indoor-dry");
        assert_eq!(rec.priority, Priority::Medium);
    }

    #[test]
    fn indoor_dry_suppressed_when_line_dry_would_fire() {
        let mut w = weather();
        w.drying_hours = 4;
        w.avg_humidity_percent = 45.0;
        let mut p = prefs();
        p.has_garden = true;
        assert!(IndoorDryRule.evaluate(&context(&w, &p)).is_none());
    }

    #[test]
    fn indoor_dry_needs_dry_air() {
        let mut w = weather();
        w.drying_hours = 0;
        w.avg_humidity_percent = 60.0;
        assert!(IndoorDryRule.evaluate(&context(&w, &prefs())).is_none());
    }
}
