use super::{DayLabel, Rule, RuleContext};
use crate::logic::solar::best_solar_window;
use crate::logic::thermostat;
use crate::models::{Category, HeatingType, Impact, Priority, Recommendation};

/// Heat pump optimal-band rule - mild days are where heat pumps shine
///
/// Conditions:
/// - Heating type is heat pump
/// - Average temperature between 5°C and 15°C
pub struct HeatPumpOptimalRule;

impl Rule for HeatPumpOptimalRule {
    fn id(&self) -> &'static str {
        "heat-pump-optimal"
    }

    fn name(&self) -> &'static str {
        "Run the heat pump steadily"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        let w = ctx.weather;
        if !(ctx.prefs.heating_type == HeatingType::HeatPump
            && (5.0..=15.0).contains(&w.avg_temp))
        {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                Category::Heating,
                Priority::Medium,
                "Let the heat pump run low and steady",
                format!(
                    "At around {:.0}°C your heat pump is in its most efficient range. A constant low flow temperature beats on/off bursts.",
                    w.avg_temp
                ),
            )
            .with_reasoning(format!(
                "Average of {:.0}°C sits in the 5-15°C band where the coefficient of performance is best",
                w.avg_temp
            ))
            .personalised(),
        )
    }
}

/// Heat pump cold-weather rule - defend efficiency through a freeze
///
/// Conditions:
/// - Heating type is heat pump
/// - Overnight low below 0°C
pub struct HeatPumpColdWeatherRule;

impl Rule for HeatPumpColdWeatherRule {
    fn id(&self) -> &'static str {
        "heat-pump-cold-weather"
    }

    fn name(&self) -> &'static str {
        "Heat pump freeze protection"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        let w = ctx.weather;
        if !(ctx.prefs.heating_type == HeatingType::HeatPump && w.temp_low < 0.0) {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                Category::Heating,
                Priority::Medium,
                "Keep the heat pump on through the freeze",
                format!(
                    "A low of {:.0}°C is forecast. Leave the heat pump running at a steady set point rather than letting the house go cold - recovery from cold costs more than holding temperature, and avoid the resistive boost mode if you can.",
                    w.temp_low
                ),
            )
            .with_reasoning(format!("Sub-zero overnight low ({:.0}°C)", w.temp_low))
            .personalised(),
        )
    }
}

/// Gas mild-weather rule - nudge the thermostat down when it's mild
///
/// Conditions:
/// - Heating type is gas
/// - Average temperature between 12°C and 18°C
pub struct GasMildWeatherRule;

impl Rule for GasMildWeatherRule {
    fn id(&self) -> &'static str {
        "gas-mild-weather"
    }

    fn name(&self) -> &'static str {
        "Mild-day thermostat setback"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        let w = ctx.weather;
        if !(ctx.prefs.heating_type == HeatingType::Gas && (12.0..=18.0).contains(&w.avg_temp)) {
            return None;
        }
        let target = thermostat::setback_temperature(ctx.prefs.preferred_temperature, 1.5);

        Some(
            Recommendation::new(
                self.id(),
                Category::Heating,
                Priority::Medium,
                "Drop the thermostat a notch",
                format!(
                    "It's mild (around {:.0}°C). Try {:.1}°C instead of your usual {:.1}°C - on a day like this you're unlikely to notice.",
                    w.avg_temp, target, ctx.prefs.preferred_temperature
                ),
            )
            .with_reasoning("Each degree off the gas thermostat trims roughly 6-8% off heating use")
            .with_savings("£1-£2 for the day")
            .personalised(),
        )
    }
}

/// Gas cold-snap pre-heat rule - warm the house before tomorrow's freeze
///
/// Conditions:
/// - Heating type is gas
/// - Overnight low below 5°C
/// - Request is for tomorrow
pub struct GasColdPreheatRule;

impl Rule for GasColdPreheatRule {
    fn id(&self) -> &'static str {
        "gas-cold-preheat"
    }

    fn name(&self) -> &'static str {
        "Pre-heat before a cold snap"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        let w = ctx.weather;
        if !(ctx.prefs.heating_type == HeatingType::Gas
            && w.temp_low < 5.0
            && ctx.day.label == DayLabel::Tomorrow)
        {
            return None;
        }
        let preheat = thermostat::preheat_temperature(ctx.prefs.preferred_temperature);
        let night = thermostat::night_temperature(ctx.prefs.preferred_temperature);

        Some(
            Recommendation::new(
                self.id(),
                Category::Heating,
                Priority::Medium,
                "Warm the house ahead of tomorrow's cold",
                format!(
                    "Tomorrow drops to {:.0}°C. Run the heating to {:.1}°C this evening, then set back to {:.1}°C overnight - the stored warmth eases the morning boost.",
                    w.temp_low, preheat, night
                ),
            )
            .with_reasoning(format!(
                "Cold night ahead ({:.0}°C low); pre-heating shifts load off the expensive morning spike",
                w.temp_low
            ))
            .personalised(),
        )
    }
}

/// Gas + solar rule - spare electricity is cheaper than burning gas
///
/// Conditions:
/// - Heating type is gas, household has solar
/// - More than 3 sunny hours
pub struct GasSolarElectricRule;

impl Rule for GasSolarElectricRule {
    fn id(&self) -> &'static str {
        "gas-solar-electric"
    }

    fn name(&self) -> &'static str {
        "Use solar surplus instead of gas"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        let w = ctx.weather;
        if !(ctx.prefs.heating_type == HeatingType::Gas
            && ctx.prefs.has_solar
            && w.sunny_hours > 3)
        {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                Category::Heating,
                Priority::Medium,
                "Spot-heat with free solar electricity",
                format!(
                    "With {} sunny hours forecast, a small electric heater in the room you're using - powered by your panels - can beat firing the gas boiler for the whole house.",
                    w.sunny_hours
                ),
            )
            .with_reasoning(format!(
                "{} sunny hours of panel output available while the boiler would heat unused rooms",
                w.sunny_hours
            ))
            .personalised(),
        )
    }
}

/// Oil mild-weather rule - oil is dear, so mild days cut deeper
///
/// Conditions:
/// - Heating type is oil
/// - Average temperature between 12°C and 18°C
pub struct OilMildWeatherRule;

impl Rule for OilMildWeatherRule {
    fn id(&self) -> &'static str {
        "oil-mild-weather"
    }

    fn name(&self) -> &'static str {
        "Mild-day oil setback"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        let w = ctx.weather;
        if !(ctx.prefs.heating_type == HeatingType::Oil && (12.0..=18.0).contains(&w.avg_temp)) {
            return None;
        }
        let target = thermostat::setback_temperature(ctx.prefs.preferred_temperature, 2.0);

        Some(
            Recommendation::new(
                self.id(),
                Category::Heating,
                Priority::Medium,
                "Turn the oil boiler down today",
                format!(
                    "Mild weather (around {:.0}°C) - set the thermostat to {:.1}°C. Oil is one of the priciest ways to heat, so mild days are the ones to claw back.",
                    w.avg_temp, target
                ),
            )
            .with_reasoning("Oil heating costs the most per kWh, so setbacks pay off fastest")
            .with_savings("£2-£4 for the day")
            .personalised(),
        )
    }
}

/// Oil cold-weather rule - plan burns before a hard cold spell
///
/// Conditions:
/// - Heating type is oil
/// - Overnight low below 5°C
pub struct OilColdWeatherRule;

impl Rule for OilColdWeatherRule {
    fn id(&self) -> &'static str {
        "oil-cold-weather"
    }

    fn name(&self) -> &'static str {
        "Cold-spell oil plan"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        let w = ctx.weather;
        if !(ctx.prefs.heating_type == HeatingType::Oil && w.temp_low < 5.0) {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                Category::Heating,
                Priority::High,
                "Heat in planned bursts through the cold",
                format!(
                    "A {:.0}°C low is forecast. Run the boiler in two or three timed blocks (morning and evening) rather than leaving it ticking over - and close off rooms you aren't using.",
                    w.temp_low
                ),
            )
            .with_reasoning(format!(
                "Cold night ({:.0}°C) on the most expensive heating fuel",
                w.temp_low
            ))
            .personalised(),
        )
    }
}

/// Oil batch-heating rule - steady cool days suit one warm charge
///
/// Conditions:
/// - Heating type is oil
/// - Average temperature between 10°C and 16°C
/// - Day-night swing under 8°C
pub struct OilBatchHeatingRule;

impl Rule for OilBatchHeatingRule {
    fn id(&self) -> &'static str {
        "oil-batch-heating"
    }

    fn name(&self) -> &'static str {
        "Batch-heat on a steady day"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        let w = ctx.weather;
        if !(ctx.prefs.heating_type == HeatingType::Oil
            && (10.0..=16.0).contains(&w.avg_temp)
            && (w.temp_high - w.temp_low) < 8.0)
        {
            return None;
        }
        let target = thermostat::batch_temperature(ctx.prefs.preferred_temperature);

        Some(
            Recommendation::new(
                self.id(),
                Category::Heating,
                Priority::Low,
                "One good burn, then coast",
                format!(
                    "Temperatures barely move today ({:.0}-{:.0}°C). Heat once to {:.1}°C and let the house coast - a steady outdoor temperature means slow heat loss.",
                    w.temp_low, w.temp_high, target
                ),
            )
            .with_reasoning(format!(
                "Only a {:.0}°C swing between day and night",
                w.temp_high - w.temp_low
            ))
            .with_impact(Impact::Low)
            .personalised(),
        )
    }
}

/// Electric heating + solar rule - direct sun-to-heat is the best deal going
///
/// Conditions:
/// - Heating type is electric, household has solar
/// - More than 3 sunny hours
pub struct ElectricHeatingSolarRule;

impl Rule for ElectricHeatingSolarRule {
    fn id(&self) -> &'static str {
        "electric-heating-solar"
    }

    fn name(&self) -> &'static str {
        "Heat on solar output"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Option<Recommendation> {
        let w = ctx.weather;
        if !(ctx.prefs.heating_type == HeatingType::Electric
            && ctx.prefs.has_solar
            && w.sunny_hours > 3)
        {
            return None;
        }
        let window = best_solar_window(w);
        let timing = window
            .map(|win| format!(" Aim for {}.", win.describe()))
            .unwrap_or_default();

        Some(
            Recommendation::new(
                self.id(),
                Category::Heating,
                Priority::High,
                "Run electric heating while the sun pays for it",
                format!(
                    "{} sunny hours are forecast - shift your heating (and storage heaters if you have them) into the solar peak.{}",
                    w.sunny_hours, timing
                ),
            )
            .with_reasoning(format!(
                "Electric heating drawn during {} sunny hours costs nothing at the meter",
                w.sunny_hours
            ))
            .with_savings("£2-£6 for the day")
            .with_impact(Impact::High)
            .personalised(),
        )
    }
}
