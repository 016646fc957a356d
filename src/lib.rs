//! # orbsample
//!
//! Propagates Keplerian orbits and exports sampled positions as CSV so they can
//! be compared with other astrodynamics packages.
//!
//! ```rust, no_run
//! use orbsample::{OrbitCatalog, OrbitSampler, SamplerConfig};
//!
//! let sampler = OrbitSampler::new(SamplerConfig::default());
//! let files = sampler.export_catalog(&OrbitCatalog::verification(), ".").unwrap();
//! assert_eq!(files.len(), 2);
//! ```
pub mod attractor;
pub mod bounding_box;
pub mod catalog;
pub mod compare;
pub mod constants;
pub mod kepler;
pub mod keplerian_element;
pub mod logging;
pub mod orbsample_errors;
pub mod position_file;
pub mod sampler;
pub mod time;
pub mod two_body;

pub use attractor::Attractor;
pub use bounding_box::BoundingBox;
pub use catalog::{OrbitCatalog, OrbitDefinition};
pub use keplerian_element::ClassicalElements;
pub use orbsample_errors::{ErrorCategory, OrbSampleError};
pub use sampler::{LabelMode, OrbitSampler, PositionSample, SampleLabel, SamplerConfig};
pub use two_body::{OrbitState, TwoBodyOrbit};
