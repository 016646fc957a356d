//! # Orbit catalogs
//!
//! An [`OrbitCatalog`] is the explicit list of [`OrbitDefinition`]s a run
//! exports. Catalogs come from three places:
//!
//! - [`OrbitCatalog::verification`] – the objects used to cross-check the
//!   propagator against other astrodynamics packages (`1996 PW`, Ceres).
//! - [`OrbitCatalog::solar_system`] – the eight planets at J2000.
//! - [`OrbitCatalog::from_yaml_str`] / [`OrbitCatalog::from_path`] – a YAML
//!   document listing arbitrary orbits.
//!
//! ## YAML layout
//!
//! ```yaml
//! orbits:
//!   - name: "1996 PW"
//!     attractor: sun
//!     semi_major_axis: 3.79035922723884e10   # km
//!     eccentricity: 0.9901593
//!     inclination: 0.5228416517687837        # rad
//!     ascending_node: 2.519967809619083      # rad
//!     periapsis_argument: 3.169512336568096  # rad
//!     true_anomaly: 0.03539440456581901      # rad
//!     epoch: "2018-01-01T00:00:00Z"          # optional, defaults to J2000
//!   - name: "moonlet"
//!     attractor: { name: "Ceres", mu: 62.6284 }
//!     ...
//! ```
//!
//! An orbit may declare `units: { distance: au, angle: deg }` (either key
//! optional) to give its semi-major axis in AU and its angles in degrees;
//! the defaults are `km` and `rad`.
//!
//! Names must be unique within a catalog since they key the output files;
//! two names differing only by spaces versus underscores are duplicates.
use std::{collections::HashSet, fs, path::Path};

use hifitime::Epoch;
use serde::Deserialize;

use crate::{
    attractor::Attractor,
    constants::{Kilometer, Radian, AU, RADEG},
    keplerian_element::ClassicalElements,
    orbsample_errors::OrbSampleError,
    sampler::file_stem,
    time::{default_epoch, parse_timestamp},
    two_body::TwoBodyOrbit,
};

/// A named orbit to export.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitDefinition {
    pub name: String,
    pub attractor: Attractor,
    pub elements: ClassicalElements,
    /// Epoch of the elements; [`default_epoch`] when absent.
    pub epoch: Option<Epoch>,
}

impl OrbitDefinition {
    pub fn new(
        name: impl Into<String>,
        attractor: Attractor,
        elements: ClassicalElements,
        epoch: Option<Epoch>,
    ) -> Self {
        OrbitDefinition {
            name: name.into(),
            attractor,
            elements,
            epoch,
        }
    }

    pub fn epoch_or_default(&self) -> Epoch {
        self.epoch.unwrap_or_else(default_epoch)
    }

    /// Build the propagatable orbit for this definition.
    pub fn to_orbit(&self) -> Result<TwoBodyOrbit, OrbSampleError> {
        TwoBodyOrbit::from_classical(
            self.attractor.clone(),
            self.elements.clone(),
            self.epoch_or_default(),
        )
        .map_err(|err| match err {
            OrbSampleError::InvalidOrbitDefinition(reason) => {
                OrbSampleError::InvalidOrbitDefinition(format!("{}: {reason}", self.name))
            }
            other => other,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrbitCatalog {
    orbits: Vec<OrbitDefinition>,
}

impl OrbitCatalog {
    /// Build a catalog, rejecting names that map to the same output file
    /// (`"a b"` and `"a_b"` both write `a_b.csv`).
    pub fn new(orbits: Vec<OrbitDefinition>) -> Result<Self, OrbSampleError> {
        {
            let mut seen = HashSet::new();
            if let Some(dup) = orbits.iter().find(|o| !seen.insert(file_stem(&o.name))) {
                return Err(OrbSampleError::DuplicateOrbitName(dup.name.clone()));
            }
        }
        Ok(OrbitCatalog { orbits })
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, OrbSampleError> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        let orbits = file
            .orbits
            .into_iter()
            .map(OrbitDefinition::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        OrbitCatalog::new(orbits)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, OrbSampleError> {
        let content = fs::read_to_string(path)?;
        OrbitCatalog::from_yaml_str(&content)
    }

    /// Objects used to compare the propagation against reference packages.
    pub fn verification() -> Self {
        let epoch = Some(Epoch::from_gregorian_utc_at_midnight(2018, 1, 1));
        OrbitCatalog {
            orbits: vec![
                // very eccentric, a good stress case for the Kepler solver
                OrbitDefinition::new(
                    "1996 PW",
                    Attractor::Sun,
                    ClassicalElements {
                        semi_major_axis: 3.79035922723884e+10,
                        eccentricity: 0.9901593,
                        inclination: 0.5228416517687837,
                        ascending_node_longitude: 2.519967809619083,
                        periapsis_argument: 3.169512336568096,
                        true_anomaly: 0.03539440456581901,
                    },
                    epoch,
                ),
                // Ceres
                OrbitDefinition::new(
                    "1",
                    Attractor::Sun,
                    ClassicalElements {
                        semi_major_axis: 4.1394459238740003e+08,
                        eccentricity: 0.0755347,
                        inclination: 0.1848916288429445,
                        ascending_node_longitude: 1.4016725260132445,
                        periapsis_argument: 1.2761023695175595,
                        true_anomaly: 6.147582300011738,
                    },
                    epoch,
                ),
            ],
        }
    }

    /// Heliocentric orbits of the eight planets at J2000.
    #[rustfmt::skip]
    pub fn solar_system() -> Self {
        let planet = |name: &str, a: f64, e: f64, i: f64, node: f64, peri: f64, nu: f64| {
            OrbitDefinition::new(
                name,
                Attractor::Sun,
                ClassicalElements {
                    semi_major_axis: a,
                    eccentricity: e,
                    inclination: i,
                    ascending_node_longitude: node,
                    periapsis_argument: peri,
                    true_anomaly: nu,
                },
                None,
            )
        };

        OrbitCatalog {
            orbits: vec![
                planet("Mercury", 5.7909176e7, 0.2161872518335417, 0.122258, 0.19016162418731905, 1.290398137330985, 0.7363828677023899),
                planet("Venus", 1.0820893e8, 0.017361719534212148, 0.0592489, 0.13963804205942293, 1.8790979389622697, 6.024347789858294),
                planet("Earth", 1.49597887e8, 0.023506053256160484, 0.9e-07, 8.219803446009808e-05, 1.4877567222443007, 6.039693392708146),
                planet("Mars", 2.27936637e8, 0.09853112210172534, 0.0322992, 0.059136325715984754, 5.804221558977953, 0.9016227920497925),
                planet("Jupiter", 7.78412027e8, 0.05041232826440195, 0.0227818, 0.056682739190454204, 0.22894709895829354, 3.986624571747394),
                planet("Saturn", 1.42672541e9, 0.05853326249640754, 0.043362, 0.10399170848152173, 1.5276434137035415, 3.2720797523951766),
                planet("Uranus", 2.87097222e9, 0.044645557888114, 0.013437, 0.03235322856941487, 2.926548412800625, 3.8644829632802806),
                planet("Neptune", 4.49825291e9, 0.011600603763700122, 0.0308778, 0.060720496894987035, 0.8712884041923264, 5.100969108525634),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<&OrbitDefinition> {
        self.orbits.iter().find(|o| o.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrbitDefinition> {
        self.orbits.iter()
    }

    pub fn len(&self) -> usize {
        self.orbits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbits.is_empty()
    }
}

impl<'a> IntoIterator for &'a OrbitCatalog {
    type Item = &'a OrbitDefinition;
    type IntoIter = std::slice::Iter<'a, OrbitDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.orbits.iter()
    }
}

// -------------------------------------------------------------------------------------------------
// YAML records
// -------------------------------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CatalogFile {
    orbits: Vec<OrbitRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AttractorRecord {
    Named(String),
    Custom { name: String, mu: f64 },
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum DistanceUnit {
    #[default]
    Km,
    Au,
}

impl DistanceUnit {
    fn to_km(self, value: f64) -> Kilometer {
        match self {
            DistanceUnit::Km => value,
            DistanceUnit::Au => value * AU,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum AngleUnit {
    #[default]
    Rad,
    Deg,
}

impl AngleUnit {
    fn to_rad(self, value: f64) -> Radian {
        match self {
            AngleUnit::Rad => value,
            AngleUnit::Deg => value * RADEG,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct UnitsRecord {
    #[serde(default)]
    distance: DistanceUnit,
    #[serde(default)]
    angle: AngleUnit,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OrbitRecord {
    name: String,
    attractor: AttractorRecord,
    semi_major_axis: f64,
    eccentricity: f64,
    inclination: f64,
    ascending_node: f64,
    periapsis_argument: f64,
    true_anomaly: f64,
    #[serde(default)]
    epoch: Option<String>,
    #[serde(default)]
    units: UnitsRecord,
}

impl TryFrom<OrbitRecord> for OrbitDefinition {
    type Error = OrbSampleError;

    fn try_from(record: OrbitRecord) -> Result<Self, Self::Error> {
        let attractor = match record.attractor {
            AttractorRecord::Named(name) => name.parse()?,
            AttractorRecord::Custom { name, mu } => Attractor::custom(name, mu)?,
        };
        let epoch = record.epoch.as_deref().map(parse_timestamp).transpose()?;

        let UnitsRecord { distance, angle } = record.units;
        let elements = ClassicalElements {
            semi_major_axis: distance.to_km(record.semi_major_axis),
            eccentricity: record.eccentricity,
            inclination: angle.to_rad(record.inclination),
            ascending_node_longitude: angle.to_rad(record.ascending_node),
            periapsis_argument: angle.to_rad(record.periapsis_argument),
            true_anomaly: angle.to_rad(record.true_anomaly),
        };
        elements.validate().map_err(|err| match err {
            OrbSampleError::InvalidOrbitDefinition(reason) => {
                OrbSampleError::InvalidOrbitDefinition(format!("{}: {reason}", record.name))
            }
            other => other,
        })?;

        Ok(OrbitDefinition::new(record.name, attractor, elements, epoch))
    }
}
