//! # Two-body orbit state and propagation
//!
//! [`TwoBodyOrbit`] is the orbital-mechanics collaborator of the sampler: it is
//! built from an [`Attractor`] and [`ClassicalElements`] at an epoch, exposes
//! the Cartesian state computed at construction, and propagates analytically
//! under Keplerian motion.
//!
//! The sampler only relies on the [`OrbitState`] trait, so any other backend
//! providing the same three primitives (epoch, position, propagate) can be
//! exported the same way.
//!
//! ## Propagation
//!
//! `propagate(dt)` always works from the state the orbit was built with:
//!
//! 1. ν₀ → E₀ → M₀ (Kepler's equation),
//! 2. M = M₀ + n·dt with n = √(μ/a³),
//! 3. M → E (Newton–Raphson) → ν,
//! 4. `(a, e, i, Ω, ω, ν)` → `(r, v)`.
//!
//! Since the result is a fresh orbit at `epoch + dt`, callers that need a
//! sample `k` steps ahead should propagate the original orbit by `k·step`
//! rather than chaining `k` single-step propagations.
use hifitime::{Duration, Epoch};
use nalgebra::Vector3;

use crate::{
    attractor::Attractor,
    constants::{DPI, GravParam, Kilometer},
    kepler::{
        eccentric_to_mean_anomaly, eccentric_to_true_anomaly, solve_kepler_equation,
        true_to_eccentric_anomaly,
    },
    keplerian_element::{classical_to_state, ClassicalElements},
    orbsample_errors::OrbSampleError,
};

/// Minimal interface the sampler needs from an orbital-mechanics backend.
pub trait OrbitState: Sized {
    /// Epoch at which [`OrbitState::position`] is valid.
    fn epoch(&self) -> Epoch;

    /// Position vector at [`OrbitState::epoch`], in km.
    fn position(&self) -> Vector3<f64>;

    /// A new state `dt` after this one.
    fn propagate(&self, dt: Duration) -> Result<Self, OrbSampleError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct TwoBodyOrbit {
    attractor: Attractor,
    elements: ClassicalElements,
    epoch: Epoch,
    position: Vector3<f64>,
    velocity: Vector3<f64>,
}

impl TwoBodyOrbit {
    /// Build an orbit from classical elements.
    ///
    /// Arguments
    /// ---------
    /// * `attractor`: central body.
    /// * `elements`: classical elements, km and radians.
    /// * `epoch`: epoch of the elements.
    ///
    /// Return
    /// ------
    /// * The orbit with its state vector computed once, or a definition error
    ///   when the attractor or the elements are invalid.
    pub fn from_classical(
        attractor: Attractor,
        elements: ClassicalElements,
        epoch: Epoch,
    ) -> Result<Self, OrbSampleError> {
        attractor.validate()?;
        elements.validate()?;

        let (position, velocity) = classical_to_state(&elements, attractor.mu());
        if !finite(&position) || !finite(&velocity) {
            return Err(OrbSampleError::NonFiniteState { seconds: 0.0 });
        }

        Ok(TwoBodyOrbit {
            attractor,
            elements,
            epoch,
            position,
            velocity,
        })
    }

    pub fn attractor(&self) -> &Attractor {
        &self.attractor
    }

    pub fn elements(&self) -> &ClassicalElements {
        &self.elements
    }

    /// Velocity vector at the orbit epoch, in km/s.
    pub fn velocity(&self) -> Vector3<f64> {
        self.velocity
    }

    /// Mean motion n = √(μ/a³), in rad/s.
    pub fn mean_motion(&self) -> f64 {
        mean_motion(self.attractor.mu(), self.elements.semi_major_axis)
    }

    /// Orbital period 2π/n.
    pub fn period(&self) -> Duration {
        Duration::from_seconds(DPI / self.mean_motion())
    }

    pub fn periapsis(&self) -> Kilometer {
        self.elements.periapsis()
    }

    pub fn apoapsis(&self) -> Kilometer {
        self.elements.apoapsis()
    }
}

fn mean_motion(mu: GravParam, semi_major_axis: Kilometer) -> f64 {
    (mu / semi_major_axis.powi(3)).sqrt()
}

fn finite(v: &Vector3<f64>) -> bool {
    v.iter().all(|c| c.is_finite())
}

impl OrbitState for TwoBodyOrbit {
    fn epoch(&self) -> Epoch {
        self.epoch
    }

    fn position(&self) -> Vector3<f64> {
        self.position
    }

    fn propagate(&self, dt: Duration) -> Result<Self, OrbSampleError> {
        let seconds = dt.to_seconds();
        let ecc = self.elements.eccentricity;

        let ecc_anomaly_0 = true_to_eccentric_anomaly(self.elements.true_anomaly, ecc);
        let mean_anomaly_0 = eccentric_to_mean_anomaly(ecc_anomaly_0, ecc);
        let mean_anomaly = mean_anomaly_0 + self.mean_motion() * seconds;

        let ecc_anomaly = solve_kepler_equation(mean_anomaly, ecc)?;
        let elements = self
            .elements
            .with_true_anomaly(eccentric_to_true_anomaly(ecc_anomaly, ecc));

        let (position, velocity) = classical_to_state(&elements, self.attractor.mu());
        if !finite(&position) || !finite(&velocity) {
            return Err(OrbSampleError::NonFiniteState { seconds });
        }

        Ok(TwoBodyOrbit {
            attractor: self.attractor.clone(),
            elements,
            epoch: self.epoch + dt,
            position,
            velocity,
        })
    }
}
