//! # Classical orbital elements
//!
//! This module defines [`ClassicalElements`], the six-parameter description
//! `(a, e, i, Ω, ω, ν)` of a two-body orbit, and the conversion to a Cartesian
//! state vector used by [`crate::two_body::TwoBodyOrbit`].
//!
//! ## Units
//!
//! - Lengths: **km**
//! - Angles: **radians**
//! - Velocities: **km/s**
//!
//! Only elliptical orbits (`0 ≤ e < 1`) are accepted; parabolic and hyperbolic
//! cases are rejected by [`ClassicalElements::validate`].
//!
//! ## Frame
//!
//! The state vector is obtained in the perifocal frame and rotated into the
//! reference frame of the elements with `R = Rz(Ω)·Rx(i)·Rz(ω)`.
use nalgebra::{Rotation3, Vector3};
use std::fmt;

use crate::{
    constants::{GravParam, Kilometer, Radian},
    orbsample_errors::OrbSampleError,
};

/// Classical orbital elements (osculating, two-body).
///
/// Units
/// -----
/// * `semi_major_axis`: km.
/// * `eccentricity`: unitless.
/// * `inclination`: radians.
/// * `ascending_node_longitude`: radians (Ω).
/// * `periapsis_argument`: radians (ω).
/// * `true_anomaly`: radians (ν).
#[derive(Debug, PartialEq, Clone)]
pub struct ClassicalElements {
    pub semi_major_axis: Kilometer,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub ascending_node_longitude: Radian,
    pub periapsis_argument: Radian,
    pub true_anomaly: Radian,
}

impl ClassicalElements {
    /// Check that the elements describe a finite elliptical orbit.
    ///
    /// Errors
    /// ------
    /// * `InvalidOrbitDefinition` when any element is not finite, `a ≤ 0`,
    ///   `e < 0` or `e ≥ 1`.
    pub fn validate(&self) -> Result<(), OrbSampleError> {
        let fields = [
            ("semi_major_axis", self.semi_major_axis),
            ("eccentricity", self.eccentricity),
            ("inclination", self.inclination),
            ("ascending_node_longitude", self.ascending_node_longitude),
            ("periapsis_argument", self.periapsis_argument),
            ("true_anomaly", self.true_anomaly),
        ];
        if let Some((field, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(OrbSampleError::InvalidOrbitDefinition(format!(
                "{field} is not finite ({value})"
            )));
        }
        if self.semi_major_axis <= 0.0 {
            return Err(OrbSampleError::InvalidOrbitDefinition(format!(
                "semi-major axis must be positive, got {} km",
                self.semi_major_axis
            )));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(OrbSampleError::InvalidOrbitDefinition(format!(
                "only elliptical orbits are supported (0 <= e < 1), got e = {}",
                self.eccentricity
            )));
        }
        Ok(())
    }

    /// Semi-latus rectum p = a(1 − e²), in km.
    pub fn semi_latus_rectum(&self) -> Kilometer {
        self.semi_major_axis * (1.0 - self.eccentricity.powi(2))
    }

    /// Periapsis distance a(1 − e), in km.
    pub fn periapsis(&self) -> Kilometer {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Apoapsis distance a(1 + e), in km.
    pub fn apoapsis(&self) -> Kilometer {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Same orbit, different position along it.
    pub fn with_true_anomaly(&self, true_anomaly: Radian) -> Self {
        ClassicalElements {
            true_anomaly,
            ..self.clone()
        }
    }
}

/// Convert classical elements into a Cartesian state vector.
///
/// Arguments
/// ---------
/// * `elements`: classical elements `(a, e, i, Ω, ω, ν)`, km and radians.
/// * `mu`: gravitational parameter of the attractor (km³/s²).
///
/// Return
/// ------
/// * `(position, velocity)` in km and km/s, in the reference frame of the
///   elements.
pub fn classical_to_state(
    elements: &ClassicalElements,
    mu: GravParam,
) -> (Vector3<f64>, Vector3<f64>) {
    let p = elements.semi_latus_rectum();
    let ecc = elements.eccentricity;
    let (sin_nu, cos_nu) = elements.true_anomaly.sin_cos();

    let radius = p / (1.0 + ecc * cos_nu);
    let position_pf = Vector3::new(cos_nu, sin_nu, 0.0) * radius;
    let velocity_pf = Vector3::new(-sin_nu, ecc + cos_nu, 0.0) * (mu / p).sqrt();

    let rotation = perifocal_to_reference(elements);
    (rotation * position_pf, rotation * velocity_pf)
}

fn perifocal_to_reference(elements: &ClassicalElements) -> Rotation3<f64> {
    let node = Rotation3::from_axis_angle(&Vector3::z_axis(), elements.ascending_node_longitude);
    let incl = Rotation3::from_axis_angle(&Vector3::x_axis(), elements.inclination);
    let peri = Rotation3::from_axis_angle(&Vector3::z_axis(), elements.periapsis_argument);
    node * incl * peri
}

impl fmt::Display for ClassicalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rad_to_deg = 180.0 / std::f64::consts::PI;
        writeln!(f, "Classical Elements")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a   (semi-major axis)       = {:.6} km",
            self.semi_major_axis
        )?;
        writeln!(
            f,
            "  e   (eccentricity)          = {:.7}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6} rad ({:.6}°)",
            self.inclination,
            self.inclination * rad_to_deg
        )?;
        writeln!(
            f,
            "  Ω   (longitude of node)     = {:.6} rad ({:.6}°)",
            self.ascending_node_longitude,
            self.ascending_node_longitude * rad_to_deg
        )?;
        writeln!(
            f,
            "  ω   (argument of periapsis) = {:.6} rad ({:.6}°)",
            self.periapsis_argument,
            self.periapsis_argument * rad_to_deg
        )?;
        writeln!(
            f,
            "  ν   (true anomaly)          = {:.6} rad ({:.6}°)",
            self.true_anomaly,
            self.true_anomaly * rad_to_deg
        )
    }
}
