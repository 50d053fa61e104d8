//! Decimal rounding used on ingestion and for GPA results

/// Round `value` to `places` decimal places, half away from zero.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Round to one decimal (ingested scores and credits).
#[must_use]
pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Round to two decimals (GPA results).
#[must_use]
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert!((round1(8.25) - 8.3).abs() < 1e-9);
        assert!((round1(7.04) - 7.0).abs() < 1e-9);
        assert!((round1(3.0) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_rounding_is_idempotent() {
        for raw in [0.0, 1.15, 6.349, 8.75, 9.999, 3.333_333] {
            let once = round1(raw);
            assert!((round1(once) - once).abs() < f64::EPSILON);
            let twice = round2(raw);
            assert!((round2(twice) - twice).abs() < f64::EPSILON);
        }
    }
}
