//! Apparent geocentric ecliptic longitude of the Sun.
//!
//! Low-precision solar theory, good to about 0.01° over several centuries
//! around J2000. ΔT (TT − UT) is ignored; at the present epoch it shifts a
//! solar-term boundary by about a minute.
//!
//! Source: Meeus, Astronomical Algorithms, 2nd ed., ch. 25 (eqs. 25.2–25.4,
//! 25.8).

use crate::julian::centuries_since_j2000;

/// Geometric mean longitude of the Sun, degrees (unnormalized).
fn mean_longitude_deg(t: f64) -> f64 {
    280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t
}

/// Mean anomaly of the Sun, degrees (unnormalized).
fn mean_anomaly_deg(t: f64) -> f64 {
    357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t
}

/// Equation of the centre, degrees.
fn equation_of_centre_deg(t: f64) -> f64 {
    let m = mean_anomaly_deg(t).to_radians();
    (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin()
}

/// Apparent longitude of the Sun at a Julian Date, degrees in [0, 360).
///
/// Includes aberration (−0.00569°) and nutation in longitude
/// (−0.00478° sin Ω).
pub fn sun_apparent_longitude_deg(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let true_longitude = mean_longitude_deg(t) + equation_of_centre_deg(t);
    let omega = (125.04 - 1_934.136 * t).to_radians();
    (true_longitude - 0.00569 - 0.00478 * omega.sin()).rem_euclid(360.0)
}

/// Index 0..24 of the solar term (節氣) segment containing a longitude,
/// counted from 立春 (315°) in 15° steps.
pub fn solar_term_index(longitude_deg: f64) -> u8 {
    ((longitude_deg - 315.0).rem_euclid(360.0) / 15.0).floor() as u8 % 24
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    #[test]
    fn j2000_longitude() {
        // 2000-01-01 12:00 TT: apparent λ ≈ 280.37°
        let lon = sun_apparent_longitude_deg(J2000_JD);
        assert!((lon - 280.37).abs() < 0.02, "λ = {lon}");
    }

    #[test]
    fn meeus_example_25a() {
        // 1992-10-13 0h TD, JD 2448908.5: apparent λ = 199.90895°
        let lon = sun_apparent_longitude_deg(2_448_908.5);
        assert!((lon - 199.909).abs() < 0.002, "λ = {lon}");
    }

    #[test]
    fn in_range_over_a_year() {
        for day in 0..366 {
            let lon = sun_apparent_longitude_deg(J2000_JD + f64::from(day));
            assert!((0.0..360.0).contains(&lon), "{lon}");
        }
    }

    #[test]
    fn term_segments() {
        assert_eq!(solar_term_index(315.0), 0);
        assert_eq!(solar_term_index(314.99), 23);
        assert_eq!(solar_term_index(330.0), 1);
        assert_eq!(solar_term_index(0.0), 3);
        assert_eq!(solar_term_index(285.0), 22);
    }
}
