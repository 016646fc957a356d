use roots::{find_root_newton_raphson, SimpleConvergency};

use crate::{constants::DPI, orbsample_errors::OrbSampleError};
use std::f64::consts::PI;

/// Eccentricity above which Newton starts from E = π instead of E = M.
const HIGH_ECCENTRICITY: f64 = 0.8;

/// Returns the principal value of an angle in radians, in [0, 2π).
pub fn principal_angle(a: f64) -> f64 {
    a.rem_euclid(DPI)
}

/// True anomaly ν → eccentric anomaly E (elliptic case).
pub fn true_to_eccentric_anomaly(true_anomaly: f64, eccentricity: f64) -> f64 {
    let half = true_anomaly / 2.0;
    2.0 * ((1.0 - eccentricity).sqrt() * half.sin()).atan2((1.0 + eccentricity).sqrt() * half.cos())
}

/// Eccentric anomaly E → true anomaly ν (elliptic case).
pub fn eccentric_to_true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let half = eccentric_anomaly / 2.0;
    2.0 * ((1.0 + eccentricity).sqrt() * half.sin()).atan2((1.0 - eccentricity).sqrt() * half.cos())
}

/// Eccentric anomaly E → mean anomaly M through Kepler's equation M = E − e·sin(E).
pub fn eccentric_to_mean_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    eccentric_anomaly - eccentricity * eccentric_anomaly.sin()
}

/// Solve Kepler's equation `E − e·sin(E) = M` for the eccentric anomaly.
///
/// The mean anomaly is first reduced to [0, 2π). For high eccentricities the
/// Newton iteration starts from E = π, which converges monotonically for every
/// M in that interval; otherwise it starts from M.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly M (radians), any value.
/// * `eccentricity`: eccentricity, `0 ≤ e < 1`.
///
/// Return
/// ------
/// * The eccentric anomaly E (radians) or `KeplerNonConvergence` when the
///   root finder gives up.
pub fn solve_kepler_equation(mean_anomaly: f64, eccentricity: f64) -> Result<f64, OrbSampleError> {
    let mean_anomaly = principal_angle(mean_anomaly);

    let f = |e_anom: f64| -> f64 { e_anom - eccentricity * e_anom.sin() - mean_anomaly };
    let df = |e_anom: f64| -> f64 { 1.0 - eccentricity * e_anom.cos() };

    let x0 = if eccentricity > HIGH_ECCENTRICITY {
        PI
    } else {
        mean_anomaly
    };

    let mut tol = SimpleConvergency {
        eps: f64::EPSILON * 1e2,
        max_iter: 50,
    };

    Ok(find_root_newton_raphson(x0, &f, &df, &mut tol)?)
}

#[cfg(test)]
mod kepler_test {

    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_principal_angle() {
        assert_relative_eq!(principal_angle(-PI / 2.0), 3.0 * PI / 2.0);
        assert_relative_eq!(principal_angle(5.0 * PI), PI, epsilon = 1e-12);
        assert_eq!(principal_angle(0.0), 0.0);
    }

    #[test]
    fn test_anomaly_conversions_are_inverse() {
        for &ecc in &[0.0, 0.0755347, 0.5, 0.9901593] {
            for &nu in &[0.03539440456581901, 1.0, 2.5, -2.0] {
                let e_anom = true_to_eccentric_anomaly(nu, ecc);
                let back = eccentric_to_true_anomaly(e_anom, ecc);
                assert_relative_eq!(back, nu, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_solve_kepler_equation() {
        for &ecc in &[0.0, 0.0755347, 0.5, 0.9, 0.9901593] {
            for &m in &[0.0, 1e-6, 0.3, 3.0, 6.2] {
                let e_anom = solve_kepler_equation(m, ecc).unwrap();
                assert_relative_eq!(
                    eccentric_to_mean_anomaly(e_anom, ecc),
                    m,
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_solve_kepler_equation_circular_is_identity() {
        assert_eq!(solve_kepler_equation(1.25, 0.0).unwrap(), 1.25);
    }
}
