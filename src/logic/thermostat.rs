//! Pure numeric thermostat suggestions, kept separate from the prose that
//! quotes them so the arithmetic is testable on its own.

/// Never suggest setting the thermostat below this.
pub const MIN_SUGGESTED_C: f64 = 15.0;

/// Never suggest boosting the thermostat above this.
pub const MAX_SUGGESTED_C: f64 = 25.0;

/// Reduce the preferred temperature by `reduction` degrees, rounded to the
/// nearest 0.5 and floored at 15°C.
pub fn setback_temperature(preferred: f64, reduction: f64) -> f64 {
    let target = ((preferred - reduction) * 2.0).round() / 2.0;
    target.max(MIN_SUGGESTED_C)
}

/// Pre-heat target ahead of a cold snap: one degree above preference, capped.
pub fn preheat_temperature(preferred: f64) -> f64 {
    (preferred + 1.0).min(MAX_SUGGESTED_C)
}

/// Overnight economy setting: one degree below preference, floored.
pub fn night_temperature(preferred: f64) -> f64 {
    (preferred - 1.0).max(MIN_SUGGESTED_C)
}

/// Batch-heating target for oil systems, same shape as pre-heat.
pub fn batch_temperature(preferred: f64) -> f64 {
    (preferred + 1.0).min(MAX_SUGGESTED_C)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setback_rounds_to_nearest_half_degree() {
        assert_eq!(setback_temperature(19.0, 1.5), 17.5);
        assert_eq!(setback_temperature(20.2, 1.5), 18.5);
        assert_eq!(setback_temperature(19.0, 2.0), 17.0);
        assert_eq!(setback_temperature(18.8, 2.0), 17.0);
    }

    #[test]
    fn setback_floors_at_fifteen() {
        assert_eq!(setback_temperature(15.0, 2.0), 15.0);
        assert_eq!(setback_temperature(16.0, 1.5), 15.0);
    }

    #[test]
    fn preheat_caps_at_twenty_five() {
        assert_eq!(preheat_temperature(19.0), 20.0);
        assert_eq!(preheat_temperature(25.0), 25.0);
    }

    #[test]
    fn night_floors_at_fifteen() {
        assert_eq!(night_temperature(19.0), 18.0);
        assert_eq!(night_temperature(15.0), 15.0);
    }

    #[test]
    fn batch_matches_preheat_shape() {
        assert_eq!(batch_temperature(21.0), 22.0);
        assert_eq!(batch_temperature(24.5), 25.0);
    }
}
