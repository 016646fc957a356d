//! # Central bodies
//!
//! An [`Attractor`] identifies the body at the focus of a two-body orbit and
//! carries its gravitational parameter μ (km³/s²). The named variants use the
//! IAU values from [`crate::constants`]; [`Attractor::Custom`] lets a catalog
//! describe any other central body.
use std::{fmt, str::FromStr};

use crate::{
    constants::{
        GravParam, EARTH_GM, JUPITER_GM, MARS_GM, MERCURY_GM, MOON_GM, NEPTUNE_GM, SATURN_GM,
        SUN_GM, URANUS_GM, VENUS_GM,
    },
    orbsample_errors::OrbSampleError,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Attractor {
    Sun,
    Mercury,
    Venus,
    Earth,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Custom { name: String, mu: GravParam },
}

impl Attractor {
    /// Gravitational parameter μ = G·M in km³/s².
    pub fn mu(&self) -> GravParam {
        match self {
            Attractor::Sun => SUN_GM,
            Attractor::Mercury => MERCURY_GM,
            Attractor::Venus => VENUS_GM,
            Attractor::Earth => EARTH_GM,
            Attractor::Moon => MOON_GM,
            Attractor::Mars => MARS_GM,
            Attractor::Jupiter => JUPITER_GM,
            Attractor::Saturn => SATURN_GM,
            Attractor::Uranus => URANUS_GM,
            Attractor::Neptune => NEPTUNE_GM,
            Attractor::Custom { mu, .. } => *mu,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Attractor::Sun => "Sun",
            Attractor::Mercury => "Mercury",
            Attractor::Venus => "Venus",
            Attractor::Earth => "Earth",
            Attractor::Moon => "Moon",
            Attractor::Mars => "Mars",
            Attractor::Jupiter => "Jupiter",
            Attractor::Saturn => "Saturn",
            Attractor::Uranus => "Uranus",
            Attractor::Neptune => "Neptune",
            Attractor::Custom { name, .. } => name,
        }
    }

    /// Build a custom attractor, rejecting a non-positive or non-finite μ.
    pub fn custom(name: impl Into<String>, mu: GravParam) -> Result<Self, OrbSampleError> {
        let attractor = Attractor::Custom {
            name: name.into(),
            mu,
        };
        attractor.validate()?;
        Ok(attractor)
    }

    pub(crate) fn validate(&self) -> Result<(), OrbSampleError> {
        let mu = self.mu();
        if mu.is_finite() && mu > 0.0 {
            Ok(())
        } else {
            Err(OrbSampleError::InvalidGravitationalParameter {
                name: self.name().to_string(),
                mu,
            })
        }
    }
}

impl fmt::Display for Attractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (μ = {} km³/s²)", self.name(), self.mu())
    }
}

impl FromStr for Attractor {
    type Err = OrbSampleError;

    /// Parse one of the named bodies, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sun" => Ok(Attractor::Sun),
            "mercury" => Ok(Attractor::Mercury),
            "venus" => Ok(Attractor::Venus),
            "earth" => Ok(Attractor::Earth),
            "moon" => Ok(Attractor::Moon),
            "mars" => Ok(Attractor::Mars),
            "jupiter" => Ok(Attractor::Jupiter),
            "saturn" => Ok(Attractor::Saturn),
            "uranus" => Ok(Attractor::Uranus),
            "neptune" => Ok(Attractor::Neptune),
            _ => Err(OrbSampleError::UnknownAttractor(s.to_string())),
        }
    }
}
